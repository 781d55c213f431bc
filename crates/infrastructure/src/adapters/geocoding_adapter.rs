//! Geocoding adapter - Implements GeocodingPort using integration_google_maps

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::Coordinate;
use integration_google_maps::{GeocodingClient, GoogleGeocodingClient, GoogleMapsConfig};
use tracing::{instrument, warn};

use super::map_error;

/// Adapter for address geocoding via the Google Geocoding API
pub struct GoogleGeocodingAdapter {
    client: GoogleGeocodingClient,
}

impl std::fmt::Debug for GoogleGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleGeocodingAdapter")
            .field("client", &"GoogleGeocodingClient")
            .finish()
    }
}

impl GoogleGeocodingAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &GoogleMapsConfig) -> Result<Self, ApplicationError> {
        let client = GoogleGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl GeocodingPort for GoogleGeocodingAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, ApplicationError> {
        match self.client.geocode(address).await {
            Ok(location) => Ok(Some(location)),
            Err(e) if e.is_not_found() => {
                warn!(error = %e, "Address could not be geocoded");
                Ok(None)
            },
            Err(e) => Err(map_error(e)),
        }
    }
}
