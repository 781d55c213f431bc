//! Google Maps client configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration shared by the geocoding and routes clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleMapsConfig {
    /// API key sent to both endpoints (sensitive - uses SecretString)
    #[serde(skip_serializing)]
    pub api_key: SecretString,

    /// Geocoding endpoint URL
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,

    /// Routes `computeRoutes` endpoint URL
    #[serde(default = "default_routes_url")]
    pub routes_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Language code for route responses
    #[serde(default = "default_language_code")]
    pub language_code: String,
}

pub(crate) fn default_geocoding_url() -> String {
    "https://maps.googleapis.com/maps/api/geocode/json".to_string()
}

pub(crate) fn default_routes_url() -> String {
    "https://routes.googleapis.com/directions/v2:computeRoutes".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_language_code() -> String {
    "en-US".to_string()
}

impl GoogleMapsConfig {
    /// Create a configuration with the public Google endpoints
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            geocoding_url: default_geocoding_url(),
            routes_url: default_routes_url(),
            timeout_secs: default_timeout_secs(),
            language_code: default_language_code(),
        }
    }

    /// Create a configuration pointing both endpoints at a mock server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            geocoding_url: format!("{base_url}/maps/api/geocode/json"),
            routes_url: format!("{base_url}/directions/v2:computeRoutes"),
            timeout_secs: 5,
            ..Self::new("test-api-key")
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.geocoding_url.is_empty() {
            return Err("geocoding_url must not be empty".to_string());
        }

        if self.routes_url.is_empty() {
            return Err("routes_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
