//! Entities - route requests and their computed results

mod route;

pub use route::{RouteRequest, RouteResult};
