//! Routing adapter - Implements RoutingPort using integration_google_maps

use application::error::ApplicationError;
use application::ports::{RouteSummary, RoutingPort};
use async_trait::async_trait;
use domain::{Coordinate, TravelMode};
use integration_google_maps::{ComputedRoute, GoogleMapsConfig, GoogleRoutesClient, RoutesClient};
use tracing::{instrument, warn};

use super::map_error;

/// Adapter for route computation via the Google Routes API
pub struct GoogleRoutingAdapter {
    client: GoogleRoutesClient,
}

impl std::fmt::Debug for GoogleRoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleRoutingAdapter")
            .field("client", &"GoogleRoutesClient")
            .finish()
    }
}

impl GoogleRoutingAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &GoogleMapsConfig) -> Result<Self, ApplicationError> {
        let client = GoogleRoutesClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    #[allow(clippy::cast_precision_loss)]
    fn map_route(route: ComputedRoute) -> RouteSummary {
        RouteSummary {
            distance_meters: route.distance_meters as f64,
            duration_seconds: route.duration_seconds,
            encoded_path: route.encoded_polyline,
        }
    }
}

#[async_trait]
impl RoutingPort for GoogleRoutingAdapter {
    #[instrument(skip(self, origin, destination))]
    async fn compute_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        mode: TravelMode,
    ) -> Result<Option<RouteSummary>, ApplicationError> {
        match self.client.compute_route(origin, destination, mode).await {
            Ok(route) => Ok(Some(Self::map_route(route))),
            Err(e) if e.is_not_found() => {
                warn!(error = %e, "No route available");
                Ok(None)
            },
            Err(e) => Err(map_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_creation() {
        let adapter = GoogleRoutingAdapter::new(&GoogleMapsConfig::new("key"));
        assert!(adapter.is_ok());
    }

    #[test]
    fn map_route_converts_fields() {
        let summary = GoogleRoutingAdapter::map_route(ComputedRoute {
            distance_meters: 100_000,
            duration_seconds: 3600,
            encoded_polyline: "abc".to_string(),
        });
        assert!((summary.distance_meters - 100_000.0).abs() < f64::EPSILON);
        assert_eq!(summary.duration_seconds, 3600);
        assert_eq!(summary.encoded_path, "abc");
    }

    #[tokio::test]
    async fn connection_failure_is_an_error() {
        let config = GoogleMapsConfig::for_testing("http://127.0.0.1:1");
        let adapter = GoogleRoutingAdapter::new(&config).unwrap();
        let origin = Coordinate::new_unchecked(0.0, 0.0);

        let result = adapter
            .compute_route(&origin, &origin, TravelMode::Drive)
            .await;
        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }
}
