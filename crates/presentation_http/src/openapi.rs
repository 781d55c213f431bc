//! OpenAPI documentation module
//!
//! Provides OpenAPI 3.0 documentation for the EmissionsIQ HTTP API and
//! serves it through Swagger UI.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers, state::AppState};

/// OpenAPI documentation for EmissionsIQ
#[derive(OpenApi)]
#[openapi(
    info(
        title = "EmissionsIQ API",
        description = "Route carbon emission estimates for driving, transit, cycling and walking",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Health check and welcome endpoints"),
        (name = "emissions", description = "Route emission calculation and mode comparison")
    ),
    paths(
        handlers::health::health_check,
        handlers::health::root,
        handlers::emissions::calculate_emissions,
        handlers::emissions::compare_modes,
    ),
    components(
        schemas(
            handlers::health::HealthResponse,
            handlers::health::WelcomeResponse,
            handlers::emissions::CalculateEmissionsRequest,
            handlers::emissions::RouteResponse,
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Create OpenAPI documentation routes
///
/// Adds the following routes:
/// - `/api-docs/openapi.json` - OpenAPI document
/// - `/swagger-ui/*` - Swagger UI interactive documentation
pub fn create_openapi_routes() -> Router<AppState> {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_spec_is_valid() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string_pretty(&doc).unwrap();
        assert!(json.contains("EmissionsIQ API"));
        assert!(json.contains("/health"));
        assert!(json.contains("/api/v1/calculate-emissions"));
        assert!(json.contains("/api/v1/compare-modes"));
    }

    #[test]
    fn openapi_has_all_tags() {
        let doc = ApiDoc::openapi();
        let tags: Vec<&str> = doc
            .tags
            .as_ref()
            .map(|t| t.iter().map(|tag| tag.name.as_str()).collect())
            .unwrap_or_default();

        assert!(tags.contains(&"health"));
        assert!(tags.contains(&"emissions"));
    }

    #[test]
    fn openapi_version_follows_crate() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));
    }
}
