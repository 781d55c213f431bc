//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error, handlers, middleware::RequestIdLayer, openapi, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and welcome endpoints
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        // Emissions API (v1)
        .route(
            "/api/v1/calculate-emissions",
            post(handlers::emissions::calculate_emissions),
        )
        .route(
            "/api/v1/compare-modes",
            get(handlers::emissions::compare_modes),
        )
        // API documentation
        .merge(openapi::create_openapi_routes())
        .fallback(error::not_found)
        // Attach state
        .with_state(state)
}

/// Build the CORS layer for the configured origins
///
/// An empty list allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Create the router with all middleware applied
///
/// Layers, outermost first: request id, tracing, CORS, body size limit.
pub fn create_app(state: AppState, server: &ServerConfig) -> Router {
    create_router(state)
        .layer(DefaultBodyLimit::max(server.max_body_size_json_bytes))
        .layer(cors_layer(&server.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new())
}
