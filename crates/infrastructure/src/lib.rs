//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the Google
//! Maps integration, and provides configuration loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, ConfigurationError, EmissionsAppConfig, Environment, LogFormat, MapsAppConfig,
    ServerConfig,
};
pub use telemetry::{TelemetryError, init_tracing};
