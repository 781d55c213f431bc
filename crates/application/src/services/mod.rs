//! Application services - Use case implementations

mod route_service;

pub use route_service::{DEFAULT_COMPARISON_MODES, RouteService};
