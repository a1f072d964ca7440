//! Server-side domain models.
//!
//! Domain models are produced by the service layer and its helpers and transformed to DTOs
//! at the controller boundary. Upstream documents that are forwarded verbatim stay as
//! `serde_json::Value` and never get a domain model of their own.

pub mod passage;
