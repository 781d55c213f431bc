//! Google Maps error types

use thiserror::Error;

/// Errors that can occur while talking to the Google Maps APIs
#[derive(Debug, Error)]
pub enum MapsError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Service answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Address could not be resolved to coordinates
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Routes API returned no route
    #[error("No route found from {from} to {to}")]
    NoRouteFound {
        /// Origin description
        from: String,
        /// Destination description
        to: String,
    },

    /// Route duration was not of the form "<N>s"
    #[error("Invalid route duration: {0}")]
    InvalidDuration(String),

    /// Rate limit or quota exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl MapsError {
    /// Returns true if the service produced no usable result
    ///
    /// These are the outcomes a caller treats as "not found" rather than as
    /// a transport failure. Every non-success answer from the service,
    /// including rate limiting, belongs here.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AddressNotFound(_)
                | Self::NoRouteFound { .. }
                | Self::RequestFailed(_)
                | Self::ParseError(_)
                | Self::InvalidDuration(_)
                | Self::RateLimitExceeded { .. }
        )
    }
}

/// Map a failed send to a transport error
///
/// The request URL carries the API key as a query parameter, so it is
/// stripped before the error text is kept.
pub(crate) fn map_send_error(err: reqwest::Error, timeout_secs: u64) -> MapsError {
    if err.is_timeout() {
        MapsError::Timeout { timeout_secs }
    } else {
        MapsError::ConnectionFailed(err.without_url().to_string())
    }
}

/// Map a body decoding failure, without the request URL
pub(crate) fn map_decode_error(err: reqwest::Error) -> MapsError {
    MapsError::ParseError(err.without_url().to_string())
}
