use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Upstream document a request was trying to obtain.
///
/// Used to build client-facing failure messages such as `Failed to fetch chapters`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamResource {
    Translations,
    Books,
    Chapters,
    EsvPassage,
    StructuredChapter,
}

impl fmt::Display for UpstreamResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Translations => "translations",
            Self::Books => "books",
            Self::Chapters => "chapters",
            Self::EsvPassage => "ESV passage",
            Self::StructuredChapter => "structured chapter",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The upstream provider could not be reached or the response body could not be read.
    ///
    /// Results in a 500 Internal Server Error naming the resource that failed.
    #[error("Request for {resource} failed: {source}")]
    Unreachable {
        resource: UpstreamResource,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream provider answered with a status other than 200 OK.
    ///
    /// The upstream body is logged server-side but never returned to the client.
    /// Results in a 500 Internal Server Error naming the resource that failed.
    #[error("Upstream returned {status} for {resource}: {body}")]
    Status {
        resource: UpstreamResource,
        status: u16,
        body: String,
    },

    /// The upstream response body was not valid JSON for the expected shape.
    ///
    /// Results in a 500 Internal Server Error.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        resource: UpstreamResource,
        #[source]
        source: serde_json::Error,
    },

    /// The upstream response decoded but lacks the `data` array the handler relies on.
    ///
    /// Results in a 500 Internal Server Error.
    #[error("Unexpected {resource} response format")]
    InvalidFormat { resource: UpstreamResource },
}

/// Converts upstream errors into HTTP responses.
///
/// Every variant maps to 500 Internal Server Error; the upstream provider is an
/// implementation detail of this backend, so its failures are this backend's failures.
/// Full details are logged at warn level while the client receives a short message:
/// - `Unreachable` / `Status` → "Failed to fetch {resource}"
/// - `Decode` → "Failed to parse JSON" for structured chapters, otherwise
///   "Failed to parse API response"
/// - `InvalidFormat` → "Invalid response format"
impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        let message = match &self {
            Self::Unreachable { resource, .. } | Self::Status { resource, .. } => {
                format!("Failed to fetch {}", resource)
            }
            Self::Decode {
                resource: UpstreamResource::StructuredChapter,
                ..
            } => "Failed to parse JSON".to_string(),
            Self::Decode { .. } => "Failed to parse API response".to_string(),
            Self::InvalidFormat { .. } => "Invalid response format".to_string(),
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto { error: message }),
        )
            .into_response()
    }
}
