//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `server`: HTTP server settings
//! - `maps`: Google Maps endpoints and API key
//! - `emissions`: emission factor overrides
//!
//! Sources, later ones winning: built-in defaults, an optional `config.toml`,
//! `EMISSIONS__*` environment variables and finally `GOOGLE_MAPS_API_KEY`.

mod emissions;
mod maps;
mod server;

use std::fmt;

use config::{ConfigBuilder, FileFormat, builder::DefaultState};
use domain::{EmissionFactorTable, TravelMode};
use integration_google_maps::GoogleMapsConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub use emissions::EmissionsAppConfig;
pub use maps::MapsAppConfig;
pub use server::{LogFormat, ServerConfig};

/// Environment variable holding the Google Maps API key
pub const GOOGLE_MAPS_API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Prefix of configuration environment variables (`EMISSIONS__SERVER__PORT`)
pub const ENV_PREFIX: &str = "EMISSIONS";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A configuration source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// No Google Maps API key is configured
    #[error("Google Maps API key is missing (set {GOOGLE_MAPS_API_KEY_ENV})")]
    MissingApiKey,

    /// A configured value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Application environment (development or production)
///
/// Validation warns when production runs with CORS open to any origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Google Maps configuration
    #[serde(default)]
    pub maps: MapsAppConfig,

    /// Emission factor overrides
    #[serde(default)]
    pub emissions: EmissionsAppConfig,
}

impl AppConfig {
    /// Load configuration from `.env`, `config.toml` and the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Load` if a source is malformed.
    pub fn load() -> Result<Self, ConfigurationError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => {},
            Err(e) => warn!(error = %e, "Failed to read .env file"),
        }

        let config = Self::builder()?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., EMISSIONS__SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("maps.api_key", std::env::var(GOOGLE_MAPS_API_KEY_ENV).ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parse configuration from a TOML document on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Load` if the document is malformed.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigurationError> {
        let config = Self::builder()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)
    }

    /// Check the configuration before the server starts
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` without an API key, or `Invalid` for
    /// out-of-range values and malformed factor overrides.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.server.port == 0 {
            return Err(ConfigurationError::Invalid(
                "server.port must not be 0".to_string(),
            ));
        }

        self.maps_config()?
            .validate()
            .map_err(|e| ConfigurationError::Invalid(format!("maps: {e}")))?;

        self.emission_factor_table()?;

        if self.is_production() && self.server.allowed_origins.is_empty() {
            warn!("CORS allows any origin in production");
        }

        Ok(())
    }

    /// Client configuration for the Google Maps integration
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingApiKey` if no API key is set.
    pub fn maps_config(&self) -> Result<GoogleMapsConfig, ConfigurationError> {
        self.maps
            .to_client_config()
            .ok_or(ConfigurationError::MissingApiKey)
    }

    /// Emission factor table with configured overrides applied
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Invalid` for unknown modes or for
    /// factors that are negative or not finite.
    pub fn emission_factor_table(&self) -> Result<EmissionFactorTable, ConfigurationError> {
        let overrides = self
            .emissions
            .factors
            .iter()
            .map(|(name, &factor)| {
                name.parse::<TravelMode>()
                    .map(|mode| (mode, factor))
                    .map_err(|e| ConfigurationError::Invalid(format!("emissions.factors: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        EmissionFactorTable::standard()
            .with_overrides(overrides)
            .map_err(|e| ConfigurationError::Invalid(format!("emissions.factors: {e}")))
    }

    /// Whether the server runs in production
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self.environment, Environment::Production)
    }
}
