//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod geocoding_adapter;
mod routing_adapter;

pub use geocoding_adapter::GoogleGeocodingAdapter;
pub use routing_adapter::GoogleRoutingAdapter;

use application::error::ApplicationError;
use integration_google_maps::MapsError;

/// Map a Google Maps error that is not a "not found" outcome
fn map_error(err: MapsError) -> ApplicationError {
    match err {
        MapsError::ConfigurationError(e) => ApplicationError::Configuration(e),
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_map_to_external_service() {
        let err = map_error(MapsError::Timeout { timeout_secs: 10 });
        assert!(matches!(err, ApplicationError::ExternalService(_)));

        let err = map_error(MapsError::ConnectionFailed("refused".to_string()));
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn configuration_errors_keep_their_kind() {
        let err = map_error(MapsError::ConfigurationError("no key".to_string()));
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }
}
