//! Emissions handlers

use application::DEFAULT_COMPARISON_MODES;
use axum::{Json, extract::State};
use domain::{RouteRequest, RouteResult, TravelMode};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::ApiError,
    middleware::{ValidatedJson, ValidatedQuery, not_blank},
    state::AppState,
};

/// Emissions calculation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({"origin": "Saint Louis, MO", "destination": "Seattle, WA", "mode": "DRIVE"}))]
pub struct CalculateEmissionsRequest {
    /// Origin address
    #[validate(custom(function = "not_blank"))]
    pub origin: String,
    /// Destination address
    #[validate(custom(function = "not_blank"))]
    pub destination: String,
    /// Travel mode (defaults to DRIVE)
    #[serde(default)]
    #[schema(value_type = String, example = "DRIVE")]
    pub mode: TravelMode,
}

/// Query string of the compare endpoint
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct CompareModesQuery {
    /// Origin address
    #[validate(custom(function = "not_blank"))]
    pub origin: String,
    /// Destination address
    #[validate(custom(function = "not_blank"))]
    pub destination: String,
}

/// A route with its estimated emissions
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "distance": 100000.0,
    "duration": 3600,
    "polyline": "encoded_polyline_string",
    "emissions": 20.0,
    "mode": "DRIVE"
}))]
pub struct RouteResponse {
    /// Distance in meters
    pub distance: f64,
    /// Duration in seconds
    pub duration: u64,
    /// Encoded route polyline
    pub polyline: String,
    /// Estimated emissions in kg CO2
    pub emissions: f64,
    /// Travel mode of the route
    #[schema(value_type = String, example = "DRIVE")]
    pub mode: TravelMode,
}

impl From<RouteResult> for RouteResponse {
    fn from(result: RouteResult) -> Self {
        Self {
            distance: result.distance_meters(),
            duration: result.duration_seconds(),
            emissions: result.emissions_kg(),
            mode: result.mode(),
            polyline: result.encoded_path().to_string(),
        }
    }
}

/// Calculate the route and emissions between two addresses
#[utoipa::path(
    post,
    path = "/api/v1/calculate-emissions",
    tag = "emissions",
    request_body = CalculateEmissionsRequest,
    responses(
        (status = 200, description = "Route calculated", body = RouteResponse),
        (status = 400, description = "Invalid request or no route", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(mode = %request.mode))]
pub async fn calculate_emissions(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CalculateEmissionsRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let request = RouteRequest::new(request.origin, request.destination, request.mode);

    let result = state.route_service.calculate_route(&request).await?;

    Ok(Json(result.into()))
}

/// Compare driving, cycling and walking, lowest emissions first
#[utoipa::path(
    get,
    path = "/api/v1/compare-modes",
    tag = "emissions",
    params(CompareModesQuery),
    responses(
        (status = 200, description = "Routes sorted by emissions", body = [RouteResponse]),
        (status = 400, description = "Missing origin or destination", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, query))]
pub async fn compare_modes(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<CompareModesQuery>,
) -> Json<Vec<RouteResponse>> {
    let results = state
        .route_service
        .compare_modes(&query.origin, &query.destination, &DEFAULT_COMPARISON_MODES)
        .await;

    Json(results.into_iter().map(RouteResponse::from).collect())
}
