//! Shared scoring vocabulary: security preferences, aggregation methods, and
//! the per-system score shape exchanged between factors and the calculator.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::galaxy::PlanetTypeId;

/// Which security band a weighting favors. To ignore security entirely, set
/// the security weight to 0 instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityPreference {
    HighSec,
    LowSec,
    NullSec,
}

/// How a run's per-system weights collapse into a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightMethod {
    Average,
    Total,
    Raw,
}

/// Per-factor contributions to a system's weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightBreakdown {
    pub jump_value: f64,
    pub diversity_value: f64,
    pub density_value: f64,
    pub security_value: f64,
}

impl WeightBreakdown {
    /// Sum of the four factor contributions.
    pub fn total(&self) -> f64 {
        self.jump_value + self.diversity_value + self.density_value + self.security_value
    }
}

/// What a weight factor reports for one system at one hop distance.
#[derive(Debug, Clone)]
pub struct SystemScore {
    pub weight: f64,
    pub breakdown: WeightBreakdown,
    /// Desired planet types present at the system.
    pub matched: BTreeSet<PlanetTypeId>,
}
