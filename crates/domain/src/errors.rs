//! Domain-level errors

use thiserror::Error;

use crate::value_objects::TravelMode;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Latitude or longitude out of range
    #[error(
        "Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180"
    )]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Travel mode name not recognised
    #[error("Unknown travel mode: {0}")]
    UnknownTravelMode(String),

    /// Emission factor is negative or not finite
    #[error("Invalid emission factor for {mode}: {value}")]
    InvalidEmissionFactor { mode: TravelMode, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinates_message_contains_values() {
        let err = DomainError::InvalidCoordinates {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(err.to_string().contains("91"));
        assert!(err.to_string().contains("-90 to 90"));
    }

    #[test]
    fn unknown_travel_mode_message() {
        let err = DomainError::UnknownTravelMode("HOVERBOARD".to_string());
        assert_eq!(err.to_string(), "Unknown travel mode: HOVERBOARD");
    }

    #[test]
    fn invalid_emission_factor_message() {
        let err = DomainError::InvalidEmissionFactor {
            mode: TravelMode::Drive,
            value: -1.0,
        };
        assert_eq!(err.to_string(), "Invalid emission factor for DRIVE: -1");
    }
}
