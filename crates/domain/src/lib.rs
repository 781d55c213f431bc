//! Domain layer for EmissionsIQ
//!
//! Contains the route and emissions vocabulary: coordinates, travel modes,
//! the emission factor table and the pure emissions estimator.
//! This layer performs no I/O.

pub mod emissions;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use emissions::estimate;
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
