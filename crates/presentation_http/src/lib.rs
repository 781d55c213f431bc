//! EmissionsIQ HTTP presentation layer
//!
//! This crate provides the HTTP API: route emissions, mode comparison,
//! health and OpenAPI documentation.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use middleware::{RequestIdLayer, ValidatedJson, ValidatedQuery, ValidationError};
pub use routes::{create_app, create_router};
pub use state::AppState;
