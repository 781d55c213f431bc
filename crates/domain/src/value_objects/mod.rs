//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod emission_factors;
mod travel_mode;

pub use coordinate::Coordinate;
pub use emission_factors::EmissionFactorTable;
pub use travel_mode::TravelMode;
