use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::server::error::{
    upstream::{UpstreamError, UpstreamResource},
    AppError,
};

/// Appends path segments to an upstream base URL.
///
/// Segments are percent-encoded individually, so identifiers supplied by clients cannot
/// introduce extra path components or a query string.
///
/// # Arguments
/// - `base` - Provider base URL, e.g. `https://api.scripture.api.bible/v1`
/// - `segments` - Segments to append; a trailing `""` produces a trailing slash
///
/// # Returns
/// - `Ok(Url)` - Base URL with the segments appended
/// - `Err(AppError::InternalError)` - Base URL cannot carry a path
pub fn endpoint_url(base: &Url, segments: &[&str]) -> Result<Url, AppError> {
    let mut url = base.clone();

    url.path_segments_mut()
        .map_err(|_| AppError::InternalError(format!("Upstream URL {} cannot carry a path", base)))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Sends an upstream request and decodes its JSON body.
///
/// Only `200 OK` is accepted. For any other status the body is read for logging and the
/// request fails with `UpstreamError::Status`.
///
/// # Arguments
/// - `request` - Fully built request including authentication headers
/// - `resource` - What is being fetched, used in error messages
///
/// # Returns
/// - `Ok(T)` - Decoded response body
/// - `Err(UpstreamError::Unreachable)` - Transport failure or body could not be read
/// - `Err(UpstreamError::Status)` - Upstream answered with a non-200 status
/// - `Err(UpstreamError::Decode)` - Body is not valid JSON for `T`
pub async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    resource: UpstreamResource,
) -> Result<T, UpstreamError> {
    let unreachable = |source| UpstreamError::Unreachable { resource, source };

    let response = request.send().await.map_err(unreachable)?;
    let status = response.status();

    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(UpstreamError::Status {
            resource,
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await.map_err(unreachable)?;

    serde_json::from_slice(&bytes).map_err(|source| UpstreamError::Decode { resource, source })
}
