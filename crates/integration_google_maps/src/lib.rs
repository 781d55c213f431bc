//! Google Maps integration for EmissionsIQ
//!
//! Provides address geocoding via the
//! [Geocoding API](https://developers.google.com/maps/documentation/geocoding)
//! and route computation via the
//! [Routes API](https://developers.google.com/maps/documentation/routes).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other integration crates.
//! [`GeocodingClient`] turns an address into a [`domain::Coordinate`] and is
//! implemented by [`GoogleGeocodingClient`]. [`RoutesClient`] computes a single
//! route between two coordinates and is implemented by [`GoogleRoutesClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::TravelMode;
//! use integration_google_maps::{
//!     GeocodingClient, GoogleGeocodingClient, GoogleMapsConfig, GoogleRoutesClient, RoutesClient,
//! };
//!
//! let config = GoogleMapsConfig::new("my-api-key");
//! let geocoder = GoogleGeocodingClient::new(&config)?;
//! let routes = GoogleRoutesClient::new(&config)?;
//!
//! let origin = geocoder.geocode("Saint Louis, MO").await?;
//! let destination = geocoder.geocode("Seattle, WA").await?;
//! let route = routes.compute_route(&origin, &destination, TravelMode::Drive).await?;
//! ```

mod config;
mod error;
mod geocoding;
mod models;
mod routes;

pub use config::GoogleMapsConfig;
pub use error::MapsError;
pub use geocoding::{GeocodingClient, GoogleGeocodingClient};
pub use models::{ComputedRoute, parse_duration_seconds, wire_travel_mode};
pub use routes::{GoogleRoutesClient, ROUTES_FIELD_MASK, RoutesClient};
