//! Emissions estimator
//!
//! Distance times a fixed per-mode factor. No I/O.

use crate::value_objects::{EmissionFactorTable, TravelMode};

/// Estimate kg CO2 for `distance_meters` travelled with `mode`, using the
/// standard factor table
///
/// `(distance_meters / 1000) * factor[mode]`. Walking and cycling are always zero.
#[must_use]
pub fn estimate(distance_meters: f64, mode: TravelMode) -> f64 {
    EmissionFactorTable::standard().estimate(distance_meters, mode)
}
