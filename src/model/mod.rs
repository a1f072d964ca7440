//! Data transfer objects shared with API consumers.
//!
//! Everything in this module is serialized straight into HTTP response bodies, so field
//! names follow the wire format rather than Rust naming where the two differ.

pub mod api;
pub mod bible;
