//! Google Maps settings.

use integration_google_maps::GoogleMapsConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

const DEFAULT_GEOCODING_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const DEFAULT_ROUTES_URL: &str = "https://routes.googleapis.com/directions/v2:computeRoutes";

/// Google Maps configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapsAppConfig {
    /// API key (sensitive - uses SecretString, never serialized)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Geocoding endpoint URL
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,

    /// Routes `computeRoutes` endpoint URL
    #[serde(default = "default_routes_url")]
    pub routes_url: String,

    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Language code sent with route requests
    #[serde(default = "default_language_code")]
    pub language_code: String,
}

fn default_geocoding_url() -> String {
    DEFAULT_GEOCODING_URL.to_string()
}

fn default_routes_url() -> String {
    DEFAULT_ROUTES_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_language_code() -> String {
    "en-US".to_string()
}

impl Default for MapsAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            geocoding_url: default_geocoding_url(),
            routes_url: default_routes_url(),
            timeout_secs: default_timeout_secs(),
            language_code: default_language_code(),
        }
    }
}

impl MapsAppConfig {
    /// The API key, if one is configured and non-blank
    #[must_use]
    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
    }

    /// Build the integration client configuration
    ///
    /// Returns `None` if no API key is configured.
    #[must_use]
    pub fn to_client_config(&self) -> Option<GoogleMapsConfig> {
        self.api_key().map(|key| GoogleMapsConfig {
            api_key: key.clone(),
            geocoding_url: self.geocoding_url.clone(),
            routes_url: self.routes_url.clone(),
            timeout_secs: self.timeout_secs,
            language_code: self.language_code.clone(),
        })
    }
}
