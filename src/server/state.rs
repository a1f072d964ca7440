//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - HTTP client for upstream scripture provider requests
//! - Endpoint settings for scripture.api.bible
//! - Endpoint settings for the ESV API

use crate::server::config::{ApiEndpoint, Config};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `reqwest::Client` uses an `Arc` internally
/// - `ApiEndpoint` is a small URL and key pair
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for making upstream API requests.
    ///
    /// Configured with security settings (no redirects) and a request timeout.
    pub http_client: reqwest::Client,

    /// scripture.api.bible endpoint used for translations, books, chapters and
    /// non-ESV passages.
    pub scripture: ApiEndpoint,

    /// api.esv.org endpoint used for ESV passages.
    pub esv: ApiEndpoint,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `http_client` - HTTP client for upstream API requests
    /// - `config` - Application configuration holding the upstream endpoints
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            http_client,
            scripture: config.scripture.clone(),
            esv: config.esv.clone(),
        }
    }
}
