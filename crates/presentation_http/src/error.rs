//! API error handling
//!
//! Every error body is `{error, code}`. Route failures never say which step
//! failed or why, so upstream details stay out of responses.

use application::{RouteUnavailable, UnavailableReason};
use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use utoipa::ToSchema;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Route unavailable: {0}")]
    RouteUnavailable(UnavailableReason),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({"error": "Could not calculate route", "code": "route_unavailable"}))]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    pub(crate) fn new(error: impl Into<String>, code: &str) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
        }
    }
}

impl ApiError {
    fn parts(&self) -> (StatusCode, ErrorResponse) {
        match self {
            Self::RouteUnavailable(_) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Could not calculate route", "route_unavailable"),
            ),
            Self::NotFound(path) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(format!("No route for {path}"), "not_found"),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.parts();
        (status, Json(body)).into_response()
    }
}

impl From<RouteUnavailable> for ApiError {
    fn from(err: RouteUnavailable) -> Self {
        debug!(reason = %err.reason, "Route unavailable");
        Self::RouteUnavailable(err.reason)
    }
}

/// Fallback for paths no route matches
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_unavailable_message() {
        let err = ApiError::RouteUnavailable(UnavailableReason::OriginNotFound);
        assert_eq!(err.to_string(), "Route unavailable: origin not found");
    }

    #[test]
    fn route_unavailable_body_is_the_same_for_every_reason() {
        for reason in [
            UnavailableReason::OriginNotFound,
            UnavailableReason::DestinationNotFound,
            UnavailableReason::RouteNotFound,
            UnavailableReason::Upstream,
        ] {
            let (status, body) = ApiError::RouteUnavailable(reason).parts();
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.code, "route_unavailable");
            assert_eq!(body.error, "Could not calculate route");
        }
    }

    #[test]
    fn not_found_names_the_path() {
        let (status, body) = ApiError::NotFound("/api/v2/x".to_string()).parts();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, "not_found");
        assert!(body.error.contains("/api/v2/x"));
    }

    #[test]
    fn error_response_serialization() {
        let json = serde_json::to_value(ErrorResponse::new(
            "Could not calculate route",
            "route_unavailable",
        ))
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "Could not calculate route", "code": "route_unavailable"})
        );
    }

    #[test]
    fn route_unavailable_converts() {
        let err: ApiError = RouteUnavailable::from(UnavailableReason::RouteNotFound).into();
        assert!(matches!(
            err,
            ApiError::RouteUnavailable(UnavailableReason::RouteNotFound)
        ));
    }

    #[tokio::test]
    async fn fallback_returns_not_found() {
        let response = not_found(Uri::from_static("/nope")).await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
