//! Factory methods for creating upstream payloads.
//!
//! This module provides realistic response bodies for the upstream scripture providers,
//! reducing boilerplate when registering canned routes on a `TestBuilder`. Each provider
//! has its own module; functions return `serde_json::Value` ready to pass to
//! `TestBuilder::with_json`.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! let test = TestBuilder::new()
//!     .with_json("/bibles", factory::scripture::bibles())
//!     .with_json(
//!         "/passage/text/",
//!         factory::esv::passage("John 3:16", "[16] For God so loved the world,"),
//!     )
//!     .build()
//!     .await?;
//! ```

pub mod esv;
pub mod scripture;
