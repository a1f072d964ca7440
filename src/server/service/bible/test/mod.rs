
use serde_json::json;
use url::Url;

use super::*;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

/// Builds an endpoint pointing at the fake upstream.
fn endpoint(test: &TestContext, api_key: &str) -> ApiEndpoint {
    ApiEndpoint {
        base_url: Url::parse(&test.base_url).unwrap(),
        api_key: api_key.to_string(),
    }
}
