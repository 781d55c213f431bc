//! Google Routes client
//!
//! Calls `directions/v2:computeRoutes` and returns the first route.

use std::time::Duration;

use async_trait::async_trait;
use domain::{Coordinate, TravelMode};
use reqwest::Client;
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use crate::{
    config::GoogleMapsConfig,
    error::{MapsError, map_decode_error, map_send_error},
    geocoding::check_status,
    models::{ComputeRoutesRequest, ComputeRoutesResponse, ComputedRoute},
};

/// Response fields requested from the Routes API
pub const ROUTES_FIELD_MASK: &str =
    "routes.duration,routes.distanceMeters,routes.polyline.encodedPolyline";

/// Trait for route computation clients
#[async_trait]
pub trait RoutesClient: Send + Sync {
    /// Compute a single route between two coordinates
    async fn compute_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        mode: TravelMode,
    ) -> Result<ComputedRoute, MapsError>;
}

/// Routes API client
#[derive(Debug)]
pub struct GoogleRoutesClient {
    client: Client,
    config: GoogleMapsConfig,
}

impl GoogleRoutesClient {
    /// Create a new routes client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GoogleMapsConfig) -> Result<Self, MapsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("EmissionsIQ/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MapsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl RoutesClient for GoogleRoutesClient {
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    async fn compute_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        mode: TravelMode,
    ) -> Result<ComputedRoute, MapsError> {
        let body = ComputeRoutesRequest::new(origin, destination, mode, &self.config.language_code);

        debug!(%mode, "Computing route");

        let response = self
            .client
            .post(&self.config.routes_url)
            .header("X-Goog-Api-Key", self.config.api_key.expose_secret())
            .header("X-Goog-FieldMask", ROUTES_FIELD_MASK)
            .json(&body)
            .send()
            .await
            .map_err(|e| map_send_error(e, self.config.timeout_secs))?;

        let response = check_status(response)?;

        let parsed: ComputeRoutesResponse = response
            .json()
            .await
            .map_err(map_decode_error)?;

        let route = parsed
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| MapsError::NoRouteFound {
                from: origin.to_string(),
                to: destination.to_string(),
            })?
            .into_computed()?;

        debug!(
            distance_meters = route.distance_meters,
            duration_seconds = route.duration_seconds,
            "Route computed"
        );

        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = GoogleMapsConfig::new("key");
        assert!(GoogleRoutesClient::new(&config).is_ok());
    }

    #[test]
    fn test_field_mask_requests_required_fields() {
        assert!(ROUTES_FIELD_MASK.contains("routes.duration"));
        assert!(ROUTES_FIELD_MASK.contains("routes.distanceMeters"));
        assert!(ROUTES_FIELD_MASK.contains("routes.polyline.encodedPolyline"));
    }
}
