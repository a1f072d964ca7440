//! scripture.api.bible repository.
//!
//! Every request carries the configured key in the `api-key` header. Documents are returned
//! as `serde_json::Value` because the service forwards them to clients mostly untouched.

use serde_json::Value;

use crate::server::{
    config::ApiEndpoint,
    data::upstream::{endpoint_url, fetch_json},
    error::{upstream::UpstreamResource, AppError},
};

/// Repository providing read access to scripture.api.bible.
pub struct ScriptureApiRepository<'a> {
    http_client: &'a reqwest::Client,
    endpoint: &'a ApiEndpoint,
}

impl<'a> ScriptureApiRepository<'a> {
    /// Creates a new ScriptureApiRepository instance.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `endpoint` - scripture.api.bible base URL and API key
    ///
    /// # Returns
    /// - `ScriptureApiRepository` - New repository instance
    pub fn new(http_client: &'a reqwest::Client, endpoint: &'a ApiEndpoint) -> Self {
        Self {
            http_client,
            endpoint,
        }
    }

    /// Gets the list of available Bible translations.
    ///
    /// # Returns
    /// - `Ok(Value)` - `GET /bibles` document
    /// - `Err(AppError::UpstreamErr)` - Request failed, non-200 status or invalid JSON
    pub async fn get_bibles(&self) -> Result<Value, AppError> {
        self.get(&["bibles"], &[], UpstreamResource::Translations)
            .await
    }

    /// Gets the books of a translation.
    ///
    /// # Arguments
    /// - `bible_id` - scripture.api.bible translation id
    ///
    /// # Returns
    /// - `Ok(Value)` - `GET /bibles/{bible_id}/books` document
    /// - `Err(AppError::UpstreamErr)` - Request failed, non-200 status or invalid JSON
    pub async fn get_books(&self, bible_id: &str) -> Result<Value, AppError> {
        self.get(&["bibles", bible_id, "books"], &[], UpstreamResource::Books)
            .await
    }

    /// Gets the chapters of a book, including any `intro` pseudo-chapter.
    ///
    /// # Arguments
    /// - `bible_id` - scripture.api.bible translation id
    /// - `book_id` - USFM book code, e.g. `JHN`
    ///
    /// # Returns
    /// - `Ok(Value)` - `GET /bibles/{bible_id}/books/{book_id}/chapters` document
    /// - `Err(AppError::UpstreamErr)` - Request failed, non-200 status or invalid JSON
    pub async fn get_chapters(&self, bible_id: &str, book_id: &str) -> Result<Value, AppError> {
        self.get(
            &["bibles", bible_id, "books", book_id, "chapters"],
            &[],
            UpstreamResource::Chapters,
        )
        .await
    }

    /// Gets a chapter as a structured JSON document.
    ///
    /// # Arguments
    /// - `bible_id` - scripture.api.bible translation id
    /// - `chapter_id` - Dotted chapter id, e.g. `JHN.3`
    ///
    /// # Returns
    /// - `Ok(Value)` - `GET /bibles/{bible_id}/chapters/{chapter_id}?content-type=json` document
    /// - `Err(AppError::UpstreamErr)` - Request failed, non-200 status or invalid JSON
    pub async fn get_chapter(&self, bible_id: &str, chapter_id: &str) -> Result<Value, AppError> {
        self.get(
            &["bibles", bible_id, "chapters", chapter_id],
            &[("content-type", "json")],
            UpstreamResource::StructuredChapter,
        )
        .await
    }

    async fn get(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        resource: UpstreamResource,
    ) -> Result<Value, AppError> {
        let url = endpoint_url(&self.endpoint.base_url, segments)?;

        let request = self
            .http_client
            .get(url)
            .query(query)
            .header("api-key", &self.endpoint.api_key);

        Ok(fetch_json(request, resource).await?)
    }
}
