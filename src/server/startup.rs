use std::time::Duration;

use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::server::error::AppError;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Installs the global tracing subscriber.
///
/// Log levels are read from `RUST_LOG`, defaulting to `info` when unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the HTTP client used for all upstream provider requests.
///
/// Redirects are disabled so a misbehaving upstream cannot bounce requests (and the API
/// keys they carry) to another host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(UPSTREAM_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Builds the CORS layer for browser clients.
///
/// Any origin may call the API. Credentials are not allowed since browsers reject a
/// wildcard origin combined with credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
}
