//! HTTP client for the EmissionsIQ API

use std::time::Duration;

use domain::TravelMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::cli::endpoint_url;

/// Errors returned by [`ApiClient`]
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection or decoding failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with an error body
    #[error("Server returned {status}: {message}{}", code_suffix(.code.as_deref()))]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },
}

fn code_suffix(code: Option<&str>) -> String {
    code.map(|c| format!(" ({c})")).unwrap_or_default()
}

/// A route as returned by the API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteView {
    /// Distance in meters
    pub distance: f64,
    /// Duration in seconds
    pub duration: u64,
    /// Encoded polyline
    pub polyline: String,
    /// Estimated kg CO2
    pub emissions: f64,
    /// Travel mode
    pub mode: TravelMode,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    code: Option<String>,
}

#[derive(Serialize)]
struct CalculateBody<'a> {
    origin: &'a str,
    destination: &'a str,
    mode: TravelMode,
}

/// Thin client over one `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Request timeout for every call
    pub const TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a client for the server at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .user_agent(concat!("emissions-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// `POST /api/v1/calculate-emissions`
    #[instrument(skip(self))]
    pub async fn calculate(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<RouteView, ClientError> {
        let response = self
            .client
            .post(endpoint_url(&self.base_url, "/api/v1/calculate-emissions"))
            .json(&CalculateBody {
                origin,
                destination,
                mode,
            })
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// `GET /api/v1/compare-modes`
    #[instrument(skip(self))]
    pub async fn compare(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RouteView>, ClientError> {
        let response = self
            .client
            .get(endpoint_url(&self.base_url, "/api/v1/compare-modes"))
            .query(&[("origin", origin), ("destination", destination)])
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// `GET /health`, returning the server version
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<String, ClientError> {
        let response = self
            .client
            .get(endpoint_url(&self.base_url, "/health"))
            .send()
            .await?;
        let body: serde_json::Value = Self::check(response).await?.json().await?;
        Ok(body
            .get("version")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("unknown")
            .to_string())
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        debug!(status = %status, body = %text, "API error response");
        let (message, code) = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => (body.error, body.code),
            Err(_) => (text, None),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_shows_code() {
        let err = ClientError::Api {
            status: 400,
            code: Some("route_unavailable".to_string()),
            message: "Could not calculate route".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Server returned 400: Could not calculate route (route_unavailable)"
        );
    }

    #[test]
    fn api_error_without_code() {
        let err = ClientError::Api {
            status: 503,
            code: None,
            message: "down".to_string(),
        };
        assert_eq!(err.to_string(), "Server returned 503: down");
    }
}
