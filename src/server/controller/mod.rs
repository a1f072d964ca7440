//! HTTP request handlers.
//!
//! Controllers extract path and query parameters, call the service layer and convert
//! domain models into DTOs. Each controller documents its endpoints with `utoipa` and
//! exposes them through a `routes()` function merged by the top-level router.

pub mod bible;
