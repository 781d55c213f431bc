//! Route service - geocode, route, estimate
//!
//! Turns a pair of addresses into a [`RouteResult`] by geocoding both ends,
//! asking the routing port for a route and estimating emissions from the
//! route distance.

use std::{fmt, sync::Arc};

use domain::{Coordinate, EmissionFactorTable, RouteRequest, RouteResult, TravelMode};
use futures::future::join_all;
use tracing::{debug, instrument, warn};

use crate::{
    error::{ApplicationError, RouteUnavailable, UnavailableReason},
    ports::{GeocodingPort, RouteSummary, RoutingPort},
};

/// Modes compared when the caller does not choose any
pub const DEFAULT_COMPARISON_MODES: [TravelMode; 3] =
    [TravelMode::Drive, TravelMode::Bicycle, TravelMode::Walk];

/// Service for route calculation and mode comparison
pub struct RouteService {
    geocoder: Arc<dyn GeocodingPort>,
    router: Arc<dyn RoutingPort>,
    factors: EmissionFactorTable,
}

impl fmt::Debug for RouteService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteService")
            .field("factors", &self.factors)
            .finish_non_exhaustive()
    }
}

impl RouteService {
    /// Create a route service using the standard emission factors
    pub fn new(geocoder: Arc<dyn GeocodingPort>, router: Arc<dyn RoutingPort>) -> Self {
        Self::with_factors(geocoder, router, EmissionFactorTable::standard())
    }

    /// Create a route service with a custom emission factor table
    pub fn with_factors(
        geocoder: Arc<dyn GeocodingPort>,
        router: Arc<dyn RoutingPort>,
        factors: EmissionFactorTable,
    ) -> Self {
        Self {
            geocoder,
            router,
            factors,
        }
    }

    /// Emission factors used for estimates
    #[must_use]
    pub const fn factors(&self) -> &EmissionFactorTable {
        &self.factors
    }

    /// Calculate a single route and its emissions
    ///
    /// Each step runs only if the previous one produced a result.
    ///
    /// # Errors
    ///
    /// Returns `RouteUnavailable` naming the step that produced nothing, or
    /// `UnavailableReason::Upstream` if a port failed.
    #[instrument(skip(self, request), fields(mode = %request.mode))]
    pub async fn calculate_route(
        &self,
        request: &RouteRequest,
    ) -> Result<RouteResult, RouteUnavailable> {
        let origin = self
            .resolve(&request.origin)
            .await?
            .ok_or(UnavailableReason::OriginNotFound)?;

        let destination = self
            .resolve(&request.destination)
            .await?
            .ok_or(UnavailableReason::DestinationNotFound)?;

        let summary = self
            .route(&origin, &destination, request.mode)
            .await?
            .ok_or(UnavailableReason::RouteNotFound)?;

        let result = RouteResult::estimated(
            request.mode,
            summary.distance_meters,
            summary.duration_seconds,
            summary.encoded_path,
            &self.factors,
        );

        debug!(
            distance_meters = result.distance_meters(),
            emissions_kg = result.emissions_kg(),
            "Route calculated"
        );

        Ok(result)
    }

    /// Calculate a route for each mode and rank them by emissions
    ///
    /// Modes that cannot be routed are left out. Results are sorted
    /// ascending by emissions and ties keep the order of `modes`. An empty
    /// vector means no mode could be routed.
    #[instrument(skip(self, origin, destination), fields(modes = modes.len()))]
    pub async fn compare_modes(
        &self,
        origin: &str,
        destination: &str,
        modes: &[TravelMode],
    ) -> Vec<RouteResult> {
        let requests: Vec<RouteRequest> = modes
            .iter()
            .map(|&mode| RouteRequest::new(origin, destination, mode))
            .collect();

        let outcomes = join_all(requests.iter().map(|r| self.calculate_route(r))).await;

        let mut results: Vec<RouteResult> = requests
            .iter()
            .zip(outcomes)
            .filter_map(|(request, outcome)| match outcome {
                Ok(result) => Some(result),
                Err(err) => {
                    debug!(mode = %request.mode, reason = %err.reason, "Mode skipped");
                    None
                },
            })
            .collect();

        // sort_by is stable
        results.sort_by(|a, b| a.emissions_kg().total_cmp(&b.emissions_kg()));
        results
    }

    async fn resolve(&self, address: &str) -> Result<Option<Coordinate>, RouteUnavailable> {
        self.geocoder.geocode(address).await.map_err(upstream)
    }

    async fn route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        mode: TravelMode,
    ) -> Result<Option<RouteSummary>, RouteUnavailable> {
        self.router
            .compute_route(origin, destination, mode)
            .await
            .map_err(upstream)
    }
}

fn upstream(err: ApplicationError) -> RouteUnavailable {
    warn!(error = %err, "Upstream call failed");
    RouteUnavailable::from(UnavailableReason::Upstream)
}
