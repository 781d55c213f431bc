//! Travel mode value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Mode of transport for a route
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    /// Passenger car
    #[default]
    Drive,
    /// Bicycle
    Bicycle,
    /// On foot
    Walk,
    /// Public transport (bus, train)
    Transit,
    /// Motorcycle or scooter
    Motorcycle,
}

impl TravelMode {
    /// Every supported mode, in declaration order
    pub const ALL: [Self; 5] = [
        Self::Drive,
        Self::Bicycle,
        Self::Walk,
        Self::Transit,
        Self::Motorcycle,
    ];

    /// Canonical upper-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Drive => "DRIVE",
            Self::Bicycle => "BICYCLE",
            Self::Walk => "WALK",
            Self::Transit => "TRANSIT",
            Self::Motorcycle => "MOTORCYCLE",
        }
    }

    /// Whether the mode moves a combustion vehicle on the road network
    #[must_use]
    pub const fn is_motorised_road(&self) -> bool {
        matches!(self, Self::Drive | Self::Motorcycle)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DRIVE" => Ok(Self::Drive),
            "BICYCLE" => Ok(Self::Bicycle),
            "WALK" => Ok(Self::Walk),
            "TRANSIT" => Ok(Self::Transit),
            "MOTORCYCLE" => Ok(Self::Motorcycle),
            _ => Err(DomainError::UnknownTravelMode(s.to_string())),
        }
    }
}
