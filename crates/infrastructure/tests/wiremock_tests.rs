//! End-to-end tests for the Google Maps adapters (wiremock-based)

use std::sync::Arc;

use application::{GeocodingPort, RouteService, RoutingPort, UnavailableReason};
use domain::{Coordinate, RouteRequest, TravelMode};
use infrastructure::{GoogleGeocodingAdapter, GoogleRoutingAdapter};
use integration_google_maps::GoogleMapsConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GEOCODE_PATH: &str = "/maps/api/geocode/json";
const ROUTES_PATH: &str = "/directions/v2:computeRoutes";

const fn geocode_json() -> &'static str {
    r#"{
        "status": "OK",
        "results": [{ "geometry": { "location": { "lat": 38.6270, "lng": -90.1994 } } }]
    }"#
}

const fn route_json() -> &'static str {
    r#"{
        "routes": [{
            "distanceMeters": 100000,
            "duration": "3600s",
            "polyline": { "encodedPolyline": "encoded_polyline_string" }
        }]
    }"#
}

async fn mount_geocode(server: &MockServer, body: &'static str) {
    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mount_route(server: &MockServer, body: &'static str) {
    Mock::given(method("POST"))
        .and(path(ROUTES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn service_for(server: &MockServer) -> RouteService {
    let config = GoogleMapsConfig::for_testing(&server.uri());
    let geocoder: Arc<dyn GeocodingPort> = Arc::new(GoogleGeocodingAdapter::new(&config).unwrap());
    let router: Arc<dyn RoutingPort> = Arc::new(GoogleRoutingAdapter::new(&config).unwrap());
    RouteService::new(geocoder, router)
}

#[tokio::test]
async fn test_saint_louis_to_seattle_drive() {
    let server = MockServer::start().await;
    mount_geocode(&server, geocode_json()).await;
    mount_route(&server, route_json()).await;

    let service = service_for(&server);
    let request = RouteRequest::new("Saint Louis, MO", "Seattle, WA", TravelMode::Drive);
    let result = service.calculate_route(&request).await.unwrap();

    assert!((result.distance_meters() - 100_000.0).abs() < f64::EPSILON);
    assert_eq!(result.duration_seconds(), 3600);
    assert_eq!(result.encoded_path(), "encoded_polyline_string");
    assert!((result.emissions_kg() - 20.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_zero_geocode_results_is_unavailable() {
    let server = MockServer::start().await;
    mount_geocode(&server, r#"{"status": "ZERO_RESULTS", "results": []}"#).await;

    let service = service_for(&server);
    let request = RouteRequest::new("Nowhere", "Seattle, WA", TravelMode::Drive);
    let err = service.calculate_route(&request).await.unwrap_err();

    assert_eq!(err.reason, UnavailableReason::OriginNotFound);
}

#[tokio::test]
async fn test_origin_failure_skips_route_request() {
    let server = MockServer::start().await;
    mount_geocode(&server, r#"{"status": "ZERO_RESULTS"}"#).await;

    Mock::given(method("POST"))
        .and(path(ROUTES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(route_json()))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let request = RouteRequest::new("Nowhere", "Seattle, WA", TravelMode::Drive);
    assert!(service.calculate_route(&request).await.is_err());
}

#[tokio::test]
async fn test_destination_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .and(query_param("address", "Saint Louis, MO"))
        .respond_with(ResponseTemplate::new(200).set_body_string(geocode_json()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .and(query_param("address", "Atlantis"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status": "ZERO_RESULTS"}"#))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let request = RouteRequest::new("Saint Louis, MO", "Atlantis", TravelMode::Drive);
    let err = service.calculate_route(&request).await.unwrap_err();

    assert_eq!(err.reason, UnavailableReason::DestinationNotFound);
}

#[tokio::test]
async fn test_empty_routes_is_route_not_found() {
    let server = MockServer::start().await;
    mount_geocode(&server, geocode_json()).await;
    mount_route(&server, r#"{"routes": []}"#).await;

    let service = service_for(&server);
    let request = RouteRequest::new("Honolulu", "Tokyo", TravelMode::Walk);
    let err = service.calculate_route(&request).await.unwrap_err();

    assert_eq!(err.reason, UnavailableReason::RouteNotFound);
}

#[tokio::test]
async fn test_compare_modes_ranking() {
    let server = MockServer::start().await;
    mount_geocode(&server, geocode_json()).await;
    mount_route(&server, route_json()).await;

    let service = service_for(&server);
    let results = service
        .compare_modes(
            "Saint Louis, MO",
            "Seattle, WA",
            &application::DEFAULT_COMPARISON_MODES,
        )
        .await;

    let modes: Vec<TravelMode> = results.iter().map(|r| r.mode()).collect();
    assert_eq!(
        modes,
        vec![TravelMode::Bicycle, TravelMode::Walk, TravelMode::Drive]
    );
}

#[tokio::test]
async fn test_geocoding_adapter_returns_coordinate() {
    let server = MockServer::start().await;
    mount_geocode(&server, geocode_json()).await;

    let config = GoogleMapsConfig::for_testing(&server.uri());
    let adapter = GoogleGeocodingAdapter::new(&config).unwrap();
    let location = adapter.geocode("Saint Louis, MO").await.unwrap().unwrap();

    assert_eq!(location, Coordinate::new(38.627, -90.1994).unwrap());
}

#[tokio::test]
async fn test_upstream_http_error_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = GoogleMapsConfig::for_testing(&server.uri());
    let adapter = GoogleGeocodingAdapter::new(&config).unwrap();

    assert!(adapter.geocode("Seattle, WA").await.unwrap().is_none());
}

#[tokio::test]
async fn test_rate_limited_origin_is_origin_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(ROUTES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(route_json()))
        .expect(0)
        .mount(&server)
        .await;

    let err = service_for(&server)
        .calculate_route(&RouteRequest::new("Saint Louis", "Seattle", TravelMode::Drive))
        .await
        .unwrap_err();

    assert_eq!(err.reason, UnavailableReason::OriginNotFound);
}

#[tokio::test]
async fn test_over_query_limit_is_not_found() {
    let server = MockServer::start().await;
    mount_geocode(&server, r#"{"status": "OVER_QUERY_LIMIT", "results": []}"#).await;

    let config = GoogleMapsConfig::for_testing(&server.uri());
    let adapter = GoogleGeocodingAdapter::new(&config).unwrap();

    assert!(adapter.geocode("Seattle, WA").await.unwrap().is_none());
}
