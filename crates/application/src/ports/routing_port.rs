//! Routing port
//!
//! Computes a single route between two coordinates for a travel mode.

use async_trait::async_trait;
use domain::{Coordinate, TravelMode};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Distance, duration and path of a computed route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Route length in meters
    pub distance_meters: f64,
    /// Travel time in seconds
    pub duration_seconds: u64,
    /// Encoded polyline of the route
    pub encoded_path: String,
}

/// Port for route computation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Compute a route between two coordinates
    ///
    /// Returns `Ok(None)` when the provider finds no route.
    async fn compute_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        mode: TravelMode,
    ) -> Result<Option<RouteSummary>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn RoutingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn RoutingPort>();
    }

    #[test]
    fn summary_debug() {
        let summary = RouteSummary {
            distance_meters: 1500.0,
            duration_seconds: 300,
            encoded_path: "abc".to_string(),
        };
        let debug = format!("{summary:?}");
        assert!(debug.contains("1500"));
    }
}
