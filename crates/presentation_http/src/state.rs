//! Application state shared across handlers

use std::sync::Arc;

use application::RouteService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Route and emissions calculation
    pub route_service: Arc<RouteService>,
}

impl AppState {
    /// Create state around a route service
    pub fn new(route_service: RouteService) -> Self {
        Self {
            route_service: Arc::new(route_service),
        }
    }
}
