use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller::bible, state::AppState};

#[derive(OpenApi)]
#[openapi(tags(
    (name = "bible", description = "Translations, books, chapters and passages")
))]
struct ApiDoc;

/// Builds the API router, including the Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(bible::routes())
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
