use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{api::ErrorDto, bible::PassageDto},
    server::{
        error::AppError, model::passage::Passage, service::bible::BibleService, state::AppState,
    },
};

/// Tag for grouping Bible endpoints in OpenAPI documentation
pub static BIBLE_TAG: &str = "bible";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PassageParams {
    /// Dotted chapter reference, e.g. `JHN.3`
    pub q: String,
}

/// Routes served by this controller, with their OpenAPI documentation.
pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_translations))
        .routes(routes!(get_books))
        .routes(routes!(get_chapters))
        .routes(routes!(get_passage))
}

/// List available Bible translations.
///
/// Returns the scripture.api.bible translation list with the English Standard Version
/// appended, since the ESV is served from a separate provider.
///
/// # Arguments
/// - `state` - Application state containing the HTTP client and upstream endpoints
///
/// # Returns
/// - `200 OK` - Translation list document
/// - `500 Internal Server Error` - Upstream unavailable or returned an unexpected format
#[utoipa::path(
    get,
    path = "/api/bible/translations",
    tag = BIBLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved translations", body = serde_json::Value),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_translations(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let translations = BibleService::new(&state.http_client, &state.scripture, &state.esv)
        .get_translations()
        .await?;

    Ok((StatusCode::OK, Json(translations)))
}

/// List the books of a translation.
///
/// # Arguments
/// - `state` - Application state containing the HTTP client and upstream endpoints
/// - `bible_id` - scripture.api.bible translation id
///
/// # Returns
/// - `200 OK` - Book list document, as returned by the provider
/// - `500 Internal Server Error` - Upstream unavailable
#[utoipa::path(
    get,
    path = "/api/bible/{bible_id}/books",
    tag = BIBLE_TAG,
    params(
        ("bible_id" = String, Path, description = "scripture.api.bible translation id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved books", body = serde_json::Value),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_books(
    State(state): State<AppState>,
    Path(bible_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let books = BibleService::new(&state.http_client, &state.scripture, &state.esv)
        .get_books(&bible_id)
        .await?;

    Ok((StatusCode::OK, Json(books)))
}

/// List the chapters of a book.
///
/// Book introductions (chapter number `intro`) are omitted.
///
/// # Arguments
/// - `state` - Application state containing the HTTP client and upstream endpoints
/// - `bible_id` - scripture.api.bible translation id
/// - `book_id` - USFM book code
///
/// # Returns
/// - `200 OK` - Chapter list document without intro entries
/// - `500 Internal Server Error` - Upstream unavailable or returned an unexpected format
#[utoipa::path(
    get,
    path = "/api/bible/{bible_id}/books/{book_id}/chapters",
    tag = BIBLE_TAG,
    params(
        ("bible_id" = String, Path, description = "scripture.api.bible translation id"),
        ("book_id" = String, Path, description = "USFM book code, e.g. JHN")
    ),
    responses(
        (status = 200, description = "Successfully retrieved chapters", body = serde_json::Value),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chapters(
    State(state): State<AppState>,
    Path((bible_id, book_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let chapters = BibleService::new(&state.http_client, &state.scripture, &state.esv)
        .get_chapters(&bible_id, &book_id)
        .await?;

    Ok((StatusCode::OK, Json(chapters)))
}

/// Get a passage in a structured document shape.
///
/// ESV passages are fetched as plain text and segmented into `para`/`verse` nodes.
/// Passages of any other translation are returned exactly as scripture.api.bible
/// provides them, which is the same shape.
///
/// # Arguments
/// - `state` - Application state containing the HTTP client and upstream endpoints
/// - `translation_id` - `ESV` or a scripture.api.bible translation id
/// - `params` - Query parameters holding the reference; rejected with 400 when `q` is absent
///
/// # Returns
/// - `200 OK` - Structured passage
/// - `400 Bad Request` - Missing `q` query parameter
/// - `500 Internal Server Error` - Upstream unavailable or returned invalid JSON
#[utoipa::path(
    get,
    path = "/api/passage/{translation_id}",
    tag = BIBLE_TAG,
    params(
        ("translation_id" = String, Path, description = "ESV or a scripture.api.bible translation id"),
        PassageParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved passage", body = PassageDto),
        (status = 400, description = "Missing reference", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_passage(
    State(state): State<AppState>,
    Path(translation_id): Path<String>,
    params: Result<Query<PassageParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let passage = BibleService::new(&state.http_client, &state.scripture, &state.esv)
        .get_passage(&translation_id, &params.q)
        .await?;

    let response = match passage {
        Passage::Structured(paragraph) => (StatusCode::OK, Json(paragraph.into_dto())).into_response(),
        Passage::Forwarded(chapter) => (StatusCode::OK, Json(chapter)).into_response(),
    };

    Ok(response)
}

#[cfg(test)]
mod test;
