
use url::Url;

use crate::server::{
    config::ApiEndpoint,
    error::{
        upstream::{UpstreamError, UpstreamResource},
        AppError,
    },
};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

/// Builds an endpoint pointing at the fake upstream.
fn endpoint(test: &TestContext, api_key: &str) -> ApiEndpoint {
    ApiEndpoint {
        base_url: Url::parse(&test.base_url).unwrap(),
        api_key: api_key.to_string(),
    }
}
