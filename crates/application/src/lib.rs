//! Application layer - Use cases and orchestration
//!
//! Defines the ports the route use case depends on and the service that
//! chains geocoding, routing and emissions estimation.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, RouteUnavailable, UnavailableReason};
pub use ports::*;
pub use services::*;
