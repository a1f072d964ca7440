//! api.esv.org repository.

use serde::Deserialize;

use crate::server::{
    config::ApiEndpoint,
    data::upstream::{endpoint_url, fetch_json},
    error::{upstream::UpstreamResource, AppError},
};

/// Options sent with every passage text request.
///
/// Verse numbers are required for segmentation; footnotes and headings would otherwise
/// be interleaved with verse text.
const PASSAGE_TEXT_OPTIONS: [(&str, &str); 5] = [
    ("include-verse-numbers", "true"),
    ("include-footnotes", "false"),
    ("include-footnote-body", "false"),
    ("include-headings", "false"),
    ("include-short-copyright", "true"),
];

/// Relevant part of a `GET /passage/text/` response.
#[derive(Debug, Deserialize)]
struct PassageTextResponse {
    #[serde(default)]
    passages: Vec<String>,
}

/// Repository providing read access to the ESV API.
pub struct EsvApiRepository<'a> {
    http_client: &'a reqwest::Client,
    endpoint: &'a ApiEndpoint,
}

impl<'a> EsvApiRepository<'a> {
    /// Creates a new EsvApiRepository instance.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `endpoint` - ESV API base URL and token
    ///
    /// # Returns
    /// - `EsvApiRepository` - New repository instance
    pub fn new(http_client: &'a reqwest::Client, endpoint: &'a ApiEndpoint) -> Self {
        Self {
            http_client,
            endpoint,
        }
    }

    /// Gets the plain text of a passage with inline `[n]` verse markers.
    ///
    /// Only the first passage of the response is used. A query the ESV API cannot resolve
    /// returns no passages, which yields an empty string rather than an error.
    ///
    /// # Arguments
    /// - `query` - Human-readable reference, e.g. `Nahum 1`
    ///
    /// # Returns
    /// - `Ok(String)` - Passage text, possibly empty
    /// - `Err(AppError::UpstreamErr)` - Request failed, non-200 status or invalid JSON
    pub async fn get_passage_text(&self, query: &str) -> Result<String, AppError> {
        let url = endpoint_url(&self.endpoint.base_url, &["passage", "text", ""])?;

        let request = self
            .http_client
            .get(url)
            .query(&[("q", query)])
            .query(&PASSAGE_TEXT_OPTIONS)
            .header("Authorization", format!("Token {}", self.endpoint.api_key));

        let response: PassageTextResponse =
            fetch_json(request, UpstreamResource::EsvPassage).await?;

        Ok(response.passages.into_iter().next().unwrap_or_default())
    }
}
