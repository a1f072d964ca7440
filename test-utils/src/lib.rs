//! Theword Test Utils
//!
//! Provides shared testing utilities for the theword backend. The backend does not own any
//! storage of its own; every request it serves is answered by calling an upstream scripture
//! provider. This crate offers a builder for standing up an in-process fake upstream with
//! canned responses so repositories, services and controllers can be tested end to end
//! without network access.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for registering canned upstream responses
//! - **TestContext**: Running fake upstream with its base URL and request log
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Realistic upstream payloads (scripture.api.bible and ESV)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_translations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_json("/bibles", factory::scripture::bibles())
//!         .build()
//!         .await?;
//!
//!     // Point the client under test at `test.base_url`...
//!
//!     let request = test.last_request().await.unwrap();
//!     assert_eq!(request.path, "/bibles");
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
