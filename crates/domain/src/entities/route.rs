//! Route request and result

use serde::{Deserialize, Serialize};

use crate::value_objects::{EmissionFactorTable, TravelMode};

/// A request to route between two free-text addresses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Origin address
    pub origin: String,
    /// Destination address
    pub destination: String,
    /// Travel mode (defaults to driving)
    #[serde(default)]
    pub mode: TravelMode,
}

impl RouteRequest {
    /// Create a new route request
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, mode: TravelMode) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            mode,
        }
    }
}

/// A computed route with its estimated emissions
///
/// Emissions are derived from distance and mode at construction and the
/// value is never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    mode: TravelMode,
    distance_meters: f64,
    duration_seconds: u64,
    encoded_path: String,
    emissions_kg: f64,
}

impl RouteResult {
    /// Build a result, estimating emissions from `factors`
    #[must_use]
    pub fn estimated(
        mode: TravelMode,
        distance_meters: f64,
        duration_seconds: u64,
        encoded_path: impl Into<String>,
        factors: &EmissionFactorTable,
    ) -> Self {
        let distance_meters = distance_meters.max(0.0);
        Self {
            mode,
            distance_meters,
            duration_seconds,
            encoded_path: encoded_path.into(),
            emissions_kg: factors.estimate(distance_meters, mode),
        }
    }

    /// Travel mode the route was computed for
    #[must_use]
    pub const fn mode(&self) -> TravelMode {
        self.mode
    }

    /// Route length in meters
    #[must_use]
    pub const fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Travel time in whole seconds
    #[must_use]
    pub const fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }

    /// Encoded polyline of the route (may be empty)
    #[must_use]
    pub fn encoded_path(&self) -> &str {
        &self.encoded_path
    }

    /// Estimated emissions in kg CO2
    #[must_use]
    pub const fn emissions_kg(&self) -> f64 {
        self.emissions_kg
    }
}
