//! Emission factor overrides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-mode emission factor overrides in kg CO2 per km
///
/// Keys are travel mode names (case-insensitive). Modes that are not listed
/// keep their standard factor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmissionsAppConfig {
    /// Factor overrides keyed by mode name
    #[serde(default)]
    pub factors: BTreeMap<String, f64>,
}
