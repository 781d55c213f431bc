//! Google Maps wire models
//!
//! Raw request/response shapes of the Geocoding and Routes APIs, plus the
//! typed [`ComputedRoute`] handed to callers.

use domain::{Coordinate, TravelMode};
use serde::{Deserialize, Serialize};

use crate::error::MapsError;

/// The first route returned by the Routes API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedRoute {
    /// Route length in meters
    pub distance_meters: u64,
    /// Travel time in whole seconds
    pub duration_seconds: u64,
    /// Encoded polyline (empty if the API omitted it)
    pub encoded_polyline: String,
}

/// Routes API travel mode name for a domain travel mode
///
/// Google calls motorcycles `TWO_WHEELER`; every other mode keeps its name.
#[must_use]
pub const fn wire_travel_mode(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Motorcycle => "TWO_WHEELER",
        other => other.as_str(),
    }
}

/// Parse a protobuf JSON duration such as `"3600s"` into whole seconds
///
/// Fractional seconds (`"12.5s"`) are rounded to the nearest second.
///
/// # Errors
///
/// Returns `MapsError::InvalidDuration` if the value is not a non-negative
/// number followed by `s`.
pub fn parse_duration_seconds(raw: &str) -> Result<u64, MapsError> {
    let invalid = || MapsError::InvalidDuration(raw.to_string());

    let number = raw.trim().strip_suffix('s').ok_or_else(invalid)?;
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));

    if whole.is_empty()
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let seconds: u64 = whole.parse().map_err(|_| invalid())?;
    let round_up = fraction.bytes().next().is_some_and(|b| b >= b'5');
    Ok(if round_up {
        seconds.saturating_add(1)
    } else {
        seconds
    })
}

// ---- Geocoding API ----

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub location: RawLatLng,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLatLng {
    pub lat: f64,
    pub lng: f64,
}

// ---- Routes API ----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ComputeRoutesRequest<'a> {
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub travel_mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_preference: Option<&'static str>,
    pub compute_alternative_routes: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_modifiers: Option<RouteModifiers>,
    pub language_code: &'a str,
    pub units: &'static str,
}

impl<'a> ComputeRoutesRequest<'a> {
    pub(crate) fn new(
        origin: &Coordinate,
        destination: &Coordinate,
        mode: TravelMode,
        language_code: &'a str,
    ) -> Self {
        // Routing preference and vehicle info are only accepted for road vehicles
        let motorised = mode.is_motorised_road();
        Self {
            origin: Waypoint::from(origin),
            destination: Waypoint::from(destination),
            travel_mode: wire_travel_mode(mode),
            routing_preference: motorised.then_some("TRAFFIC_AWARE"),
            compute_alternative_routes: false,
            route_modifiers: motorised.then_some(RouteModifiers {
                vehicle_info: VehicleInfo {
                    emission_type: "GASOLINE",
                },
            }),
            language_code,
            units: "METRIC",
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Waypoint {
    pub location: WaypointLocation,
}

impl From<&Coordinate> for Waypoint {
    fn from(coordinate: &Coordinate) -> Self {
        Self {
            location: WaypointLocation {
                lat_lng: LatLng {
                    latitude: coordinate.latitude(),
                    longitude: coordinate.longitude(),
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WaypointLocation {
    pub lat_lng: LatLng,
}

#[derive(Debug, Serialize)]
pub(crate) struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RouteModifiers {
    pub vehicle_info: VehicleInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VehicleInfo {
    pub emission_type: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ComputeRoutesResponse {
    #[serde(default)]
    pub routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawRoute {
    #[serde(default)]
    pub distance_meters: u64,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub polyline: Option<RawPolyline>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawPolyline {
    #[serde(default)]
    pub encoded_polyline: Option<String>,
}

impl RawRoute {
    pub(crate) fn into_computed(self) -> Result<ComputedRoute, MapsError> {
        let duration_seconds =
            parse_duration_seconds(self.duration.as_deref().unwrap_or("0s"))?;
        Ok(ComputedRoute {
            distance_meters: self.distance_meters,
            duration_seconds,
            encoded_polyline: self
                .polyline
                .and_then(|p| p.encoded_polyline)
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration_seconds("3600s").unwrap(), 3600);
        assert_eq!(parse_duration_seconds("0s").unwrap(), 0);
        assert_eq!(parse_duration_seconds(" 42s ").unwrap(), 42);
    }

    #[test]
    fn test_parse_fractional_duration_rounds() {
        assert_eq!(parse_duration_seconds("12.4s").unwrap(), 12);
        assert_eq!(parse_duration_seconds("12.5s").unwrap(), 13);
    }

    #[test]
    fn test_parse_invalid_duration() {
        assert!(parse_duration_seconds("3600").is_err());
        assert!(parse_duration_seconds("s").is_err());
        assert!(parse_duration_seconds("-5s").is_err());
        assert!(parse_duration_seconds("1h").is_err());
        assert!(parse_duration_seconds("").is_err());
    }

    #[test]
    fn test_wire_travel_mode() {
        assert_eq!(wire_travel_mode(TravelMode::Drive), "DRIVE");
        assert_eq!(wire_travel_mode(TravelMode::Transit), "TRANSIT");
        assert_eq!(wire_travel_mode(TravelMode::Motorcycle), "TWO_WHEELER");
    }

    #[test]
    fn test_drive_request_body() {
        let origin = Coordinate::new_unchecked(38.627, -90.1994);
        let destination = Coordinate::new_unchecked(47.6062, -122.3321);
        let body = ComputeRoutesRequest::new(&origin, &destination, TravelMode::Drive, "en-US");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["origin"]["location"]["latLng"]["latitude"], 38.627);
        assert_eq!(
            json["destination"]["location"]["latLng"]["longitude"],
            -122.3321
        );
        assert_eq!(json["travelMode"], "DRIVE");
        assert_eq!(json["routingPreference"], "TRAFFIC_AWARE");
        assert_eq!(json["computeAlternativeRoutes"], false);
        assert_eq!(
            json["routeModifiers"]["vehicleInfo"]["emissionType"],
            "GASOLINE"
        );
        assert_eq!(json["languageCode"], "en-US");
        assert_eq!(json["units"], "METRIC");
    }

    #[test]
    fn test_walk_request_body_omits_vehicle_fields() {
        let point = Coordinate::new_unchecked(0.0, 0.0);
        let body = ComputeRoutesRequest::new(&point, &point, TravelMode::Walk, "en-US");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["travelMode"], "WALK");
        assert!(json.get("routingPreference").is_none());
        assert!(json.get("routeModifiers").is_none());
    }

    #[test]
    fn test_route_response_parsing() {
        let json = r#"{"routes": [{
            "distanceMeters": 100000,
            "duration": "3600s",
            "polyline": {"encodedPolyline": "encoded_polyline_string"}
        }]}"#;
        let response: ComputeRoutesResponse = serde_json::from_str(json).unwrap();
        let route = response.routes.into_iter().next().unwrap().into_computed().unwrap();
        assert_eq!(route.distance_meters, 100_000);
        assert_eq!(route.duration_seconds, 3600);
        assert_eq!(route.encoded_polyline, "encoded_polyline_string");
    }

    #[test]
    fn test_route_missing_fields_default() {
        let response: ComputeRoutesResponse = serde_json::from_str(r#"{"routes": [{}]}"#).unwrap();
        let route = response.routes.into_iter().next().unwrap().into_computed().unwrap();
        assert_eq!(route.distance_meters, 0);
        assert_eq!(route.duration_seconds, 0);
        assert!(route.encoded_polyline.is_empty());
    }

    #[test]
    fn test_empty_routes_response() {
        let response: ComputeRoutesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.routes.is_empty());
    }

    #[test]
    fn test_geocode_response_parsing() {
        let json = r#"{
            "status": "OK",
            "results": [{"geometry": {"location": {"lat": 38.627, "lng": -90.1994}}}]
        }"#;
        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status.as_deref(), Some("OK"));
        assert_eq!(response.results.len(), 1);
        assert!((response.results[0].geometry.location.lat - 38.627).abs() < f64::EPSILON);
    }

    #[test]
    fn test_geocode_zero_results_parsing() {
        let response: GeocodeResponse =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS"}"#).unwrap();
        assert!(response.results.is_empty());
        assert!(response.error_message.is_none());
    }
}
