use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tokio::sync::{oneshot, Mutex};

/// Response returned by the fake upstream for a registered path.
pub(crate) struct CannedResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

/// A request received by the fake upstream.
///
/// Captured before the canned response is chosen so tests can assert on exactly what
/// the code under test sent, including requests to unregistered paths.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method, e.g. `GET`.
    pub method: String,
    /// Request path without the query string.
    pub path: String,
    /// Raw query string, if any.
    pub query: Option<String>,
    /// All request headers.
    pub headers: HeaderMap,
}

impl RecordedRequest {
    /// Returns a request header as a string slice.
    ///
    /// # Arguments
    /// - `name` - Header name, case-insensitive
    ///
    /// # Returns
    /// - `Some(&str)` - Header value if present and valid visible ASCII
    /// - `None` - Header missing or not representable as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Returns the percent-decoded value of a query parameter.
    ///
    /// # Arguments
    /// - `name` - Query parameter name
    ///
    /// # Returns
    /// - `Some(String)` - Decoded value of the first matching parameter
    /// - `None` - No query string or parameter not present
    pub fn query_param(&self, name: &str) -> Option<String> {
        let query = self.query.as_deref()?;

        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

/// Shared state of a running fake upstream.
pub(crate) struct FakeUpstream {
    routes: HashMap<String, CannedResponse>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeUpstream {
    pub(crate) fn new(routes: HashMap<String, CannedResponse>) -> Self {
        Self {
            routes,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Builds the router serving every path through the canned route table.
    pub(crate) fn router(self: Arc<Self>) -> Router {
        Router::new().fallback(respond).with_state(self)
    }
}

async fn respond(
    State(upstream): State<Arc<FakeUpstream>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    upstream.requests.lock().await.push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
    });

    match upstream.routes.get(uri.path()) {
        Some(canned) => (
            canned.status,
            [(header::CONTENT_TYPE, canned.content_type)],
            canned.body.clone(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"error":"not found"}"#.to_string(),
        )
            .into_response(),
    }
}

/// Test context for a running fake upstream provider.
///
/// Holds the base URL the code under test should be configured with and gives access
/// to every request the fake upstream has received. The fake upstream is shut down
/// when the context is dropped.
pub struct TestContext {
    /// Base URL of the fake upstream, e.g. `http://127.0.0.1:49152`.
    ///
    /// Has no trailing slash, matching how upstream base URLs are configured.
    pub base_url: String,

    upstream: Arc<FakeUpstream>,

    shutdown: Option<oneshot::Sender<()>>,
}

impl TestContext {
    pub(crate) fn new(
        base_url: String,
        upstream: Arc<FakeUpstream>,
        shutdown: oneshot::Sender<()>,
    ) -> Self {
        Self {
            base_url,
            upstream,
            shutdown: Some(shutdown),
        }
    }

    /// Returns every request received so far, in arrival order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.upstream.requests.lock().await.clone()
    }

    /// Returns the most recently received request, if any.
    pub async fn last_request(&self) -> Option<RecordedRequest> {
        self.upstream.requests.lock().await.last().cloned()
    }

    /// Returns the number of requests received so far.
    pub async fn request_count(&self) -> usize {
        self.upstream.requests.lock().await.len()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
