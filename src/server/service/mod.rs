//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Deciding which upstream provider serves a request
//! - **Orchestration**: Coordinating repository calls and the passage parser
//! - **Domain Models**: Working with domain models rather than DTOs or raw upstream text

pub mod bible;
