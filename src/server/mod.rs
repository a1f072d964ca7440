//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation: API endpoints, business logic,
//! upstream provider access and infrastructure. The backend uses Axum as the web framework
//! and reqwest to talk to the scripture.api.bible and ESV upstream providers.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Provider selection and orchestration
//! - **Data Layer** (`data/`) - Upstream repositories (URLs, auth headers, status checks)
//! - **Model Layer** (`model/`) - Domain models for structured passages
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Utilities** (`util/`) - Pure ESV reference normalization and verse segmentation
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (HTTP client, upstream endpoints)
//! - **Startup** (`startup`) - Tracing, HTTP client and CORS setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts parameters and calls the service
//! 3. **Service** picks the upstream provider and calls its repository
//! 4. **Data** sends the upstream request and decodes the response
//! 5. **Service** reshapes the document (filtering, ESV segmentation)
//! 6. **Controller** converts domain models to DTOs and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
