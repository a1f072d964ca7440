mod get_passage;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use url::Url;

use crate::server::{
    config::{ApiEndpoint, Config},
    router,
    state::AppState,
};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

/// Builds the application router with both upstream providers pointing at the fake upstream.
fn app(test: &TestContext) -> Router {
    let base_url = Url::parse(&test.base_url).unwrap();
    let config = Config {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        scripture: ApiEndpoint {
            base_url: base_url.clone(),
            api_key: "bible-key".to_string(),
        },
        esv: ApiEndpoint {
            base_url,
            api_key: "esv-token".to_string(),
        },
    };

    router::router().with_state(AppState::new(reqwest::Client::new(), &config))
}

/// Sends a GET request through the router and returns the status and decoded JSON body.
async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
