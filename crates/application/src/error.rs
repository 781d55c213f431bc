//! Application-level errors

use std::fmt;

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Which step of route calculation produced nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// Origin address could not be geocoded
    OriginNotFound,
    /// Destination address could not be geocoded
    DestinationNotFound,
    /// The routing provider returned no route
    RouteNotFound,
    /// An upstream service failed
    Upstream,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::OriginNotFound => "origin not found",
            Self::DestinationNotFound => "destination not found",
            Self::RouteNotFound => "no route found",
            Self::Upstream => "upstream service failed",
        };
        f.write_str(text)
    }
}

/// A route could not be calculated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Route unavailable: {reason}")]
pub struct RouteUnavailable {
    /// Why the route is unavailable
    pub reason: UnavailableReason,
}

impl From<UnavailableReason> for RouteUnavailable {
    fn from(reason: UnavailableReason) -> Self {
        Self { reason }
    }
}
