//! Geocoding port
//!
//! Resolves a free-form address to a coordinate.

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for address geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve an address to coordinates
    ///
    /// Returns `Ok(None)` when the provider has no usable result for the
    /// address. Transport failures are reported as errors.
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeocodingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }

    #[tokio::test]
    async fn mock_returns_not_found() {
        let mut mock = MockGeocodingPort::new();
        mock.expect_geocode().returning(|_| Ok(None));

        assert!(mock.geocode("Atlantis").await.unwrap().is_none());
    }
}
