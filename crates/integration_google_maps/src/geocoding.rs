//! Google Geocoding client
//!
//! Converts free-form address strings to coordinates using the first result
//! of the Geocoding API.

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
use reqwest::{Client, Response, StatusCode};
use secrecy::ExposeSecret;
use tracing::{debug, instrument, warn};

use crate::{
    config::GoogleMapsConfig,
    error::{MapsError, map_decode_error, map_send_error},
    models::GeocodeResponse,
};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to geographic coordinates
    async fn geocode(&self, address: &str) -> Result<Coordinate, MapsError>;
}

/// Geocoding API client
#[derive(Debug)]
pub struct GoogleGeocodingClient {
    client: Client,
    config: GoogleMapsConfig,
}

impl GoogleGeocodingClient {
    /// Create a new geocoding client
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
impl GeocodingClient for GoogleGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Coordinate, MapsError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(MapsError::AddressNotFound(
                "Address must not be empty".to_string(),
            ));
        }

        let params = [
            ("address", address),
            ("key", self.config.api_key.expose_secret()),
        ];

        debug!(%address, "Geocoding address");

        let response = self
            .client
            .get(&self.config.geocoding_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| map_send_error(e, self.config.timeout_secs))?;

        let response = check_status(response)?;

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(map_decode_error)?;

        match body.status.as_deref() {
            None | Some("OK") => {},
            Some("ZERO_RESULTS") => return Err(MapsError::AddressNotFound(address.to_string())),
            Some("OVER_QUERY_LIMIT") => {
                return Err(MapsError::RateLimitExceeded {
                    retry_after_secs: None,
                });
            },
            Some(status) => {
                warn!(%status, message = ?body.error_message, "Geocoding API rejected request");
                return Err(MapsError::RequestFailed(match body.error_message {
                    Some(message) => format!("{status}: {message}"),
                    None => status.to_string(),
                }));
            },
        }

        let location = body
            .results
            .into_iter()
            .next()
            .ok_or_else(|| MapsError::AddressNotFound(address.to_string()))?
            .geometry
            .location;

        debug!(%address, lat = %location.lat, lng = %location.lng, "Geocoded address");

        Coordinate::new(location.lat, location.lng).map_err(|e| MapsError::ParseError(e.to_string()))
    }
}

/// Map non-success HTTP statuses to errors
pub(crate) fn check_status(response: Response) -> Result<Response, MapsError> {
    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        return Err(MapsError::RateLimitExceeded { retry_after_secs });
    }
    if !status.is_success() {
        return Err(MapsError::RequestFailed(format!("HTTP {status}")));
    }
    Ok(response)
}
