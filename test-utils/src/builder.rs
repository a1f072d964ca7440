use std::{collections::HashMap, sync::Arc};

use axum::http::StatusCode;
use serde_json::Value;
use tokio::{net::TcpListener, sync::oneshot};

use crate::{
    context::{CannedResponse, FakeUpstream, TestContext},
    error::TestError,
};

/// Builder for creating test contexts backed by a fake upstream provider.
///
/// Provides a fluent interface for registering the responses the fake upstream should
/// return for each request path. Call `build()` to bind the fake upstream on an ephemeral
/// local port and obtain a running `TestContext`.
///
/// Paths are matched exactly against the request path, ignoring the query string. Any
/// path that was not registered answers `404 Not Found`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, factory};
///
/// let test = TestBuilder::new()
///     .with_json("/bibles", factory::scripture::bibles())
///     .with_status("/bibles/missing/books", 500, serde_json::json!({}))
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Canned responses keyed by request path.
    routes: HashMap<String, CannedResponse>,
}

impl TestBuilder {
    /// Creates a new test builder with no routes configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with an empty route table
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Registers a `200 OK` JSON response for the provided path.
    ///
    /// # Arguments
    /// - `path` - Exact request path to answer, e.g. `/bibles`
    /// - `body` - JSON body to return
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_json(self, path: &str, body: Value) -> Self {
        self.with_status(path, 200, body)
    }

    /// Registers a JSON response with a custom status code for the provided path.
    ///
    /// Used to simulate upstream failures such as rate limiting or authentication errors.
    ///
    /// # Arguments
    /// - `path` - Exact request path to answer
    /// - `status` - HTTP status code to return
    /// - `body` - JSON body to return
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_status(mut self, path: &str, status: u16, body: Value) -> Self {
        self.routes.insert(
            path.to_string(),
            CannedResponse {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                content_type: "application/json",
                body: body.to_string(),
            },
        );
        self
    }

    /// Registers a raw, non-JSON `200 OK` response for the provided path.
    ///
    /// Used to simulate an upstream that returns a body which fails to decode.
    ///
    /// # Arguments
    /// - `path` - Exact request path to answer
    /// - `body` - Raw text body to return
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_text(mut self, path: &str, body: &str) -> Self {
        self.routes.insert(
            path.to_string(),
            CannedResponse {
                status: StatusCode::OK,
                content_type: "text/plain",
                body: body.to_string(),
            },
        );
        self
    }

    /// Starts the fake upstream and returns the running test context.
    ///
    /// Binds a listener on `127.0.0.1:0`, spawns the fake upstream onto the current
    /// tokio runtime and hands back a context holding its base URL. The server shuts
    /// down when the context is dropped.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running fake upstream
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn build(self) -> Result<TestContext, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let upstream = Arc::new(FakeUpstream::new(self.routes));
        let app = upstream.clone().router();

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(TestContext::new(
            format!("http://{}", addr),
            upstream,
            shutdown_tx,
        ))
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
