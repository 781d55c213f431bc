//! Per-mode emission factors

use crate::errors::DomainError;
use crate::value_objects::TravelMode;

/// Kilograms of CO2 emitted per kilometre, for every travel mode
///
/// The table is always complete: each [`TravelMode`] has exactly one factor.
/// Build it once at startup and share it read-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionFactorTable {
    factors: [f64; TravelMode::ALL.len()],
}

impl EmissionFactorTable {
    /// Average passenger car
    pub const DRIVE_KG_PER_KM: f64 = 0.2;
    /// Public transport (bus/train)
    pub const TRANSIT_KG_PER_KM: f64 = 0.05;
    /// Walking
    pub const WALK_KG_PER_KM: f64 = 0.0;
    /// Cycling
    pub const BICYCLE_KG_PER_KM: f64 = 0.0;
    /// Motorcycle
    pub const MOTORCYCLE_KG_PER_KM: f64 = 0.1;

    /// The built-in factor table
    #[must_use]
    pub const fn standard() -> Self {
        let mut factors = [0.0; TravelMode::ALL.len()];
        factors[TravelMode::Drive.index()] = Self::DRIVE_KG_PER_KM;
        factors[TravelMode::Bicycle.index()] = Self::BICYCLE_KG_PER_KM;
        factors[TravelMode::Walk.index()] = Self::WALK_KG_PER_KM;
        factors[TravelMode::Transit.index()] = Self::TRANSIT_KG_PER_KM;
        factors[TravelMode::Motorcycle.index()] = Self::MOTORCYCLE_KG_PER_KM;
        Self { factors }
    }

    /// Replace the factor for one mode
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEmissionFactor` if `kg_per_km` is negative or not finite.
    pub fn with_factor(mut self, mode: TravelMode, kg_per_km: f64) -> Result<Self, DomainError> {
        if !kg_per_km.is_finite() || kg_per_km < 0.0 {
            return Err(DomainError::InvalidEmissionFactor {
                mode,
                value: kg_per_km,
            });
        }
        self.factors[mode.index()] = kg_per_km;
        Ok(self)
    }

    /// Apply a set of overrides on top of this table
    ///
    /// # Errors
    ///
    /// Fails on the first invalid factor.
    pub fn with_overrides<I>(self, overrides: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (TravelMode, f64)>,
    {
        overrides
            .into_iter()
            .try_fold(self, |table, (mode, factor)| table.with_factor(mode, factor))
    }

    /// Factor for a mode in kg CO2 per km
    #[must_use]
    pub const fn factor(&self, mode: TravelMode) -> f64 {
        self.factors[mode.index()]
    }

    /// Estimate emissions in kg CO2 for a distance travelled with `mode`
    ///
    /// Negative or NaN distances count as zero.
    #[must_use]
    pub fn estimate(&self, distance_meters: f64, mode: TravelMode) -> f64 {
        (distance_meters.max(0.0) / 1000.0) * self.factor(mode)
    }

    /// Iterate over `(mode, factor)` pairs in [`TravelMode::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (TravelMode, f64)> + '_ {
        TravelMode::ALL.into_iter().map(|mode| (mode, self.factor(mode)))
    }
}

impl Default for EmissionFactorTable {
    fn default() -> Self {
        Self::standard()
    }
}
