//! Three-tier severity classification from energy density and impact force.
//!
//! Each metric maps to a tier through two strict thresholds; a value exactly
//! at a threshold stays in the lower tier. The combined rating takes the more
//! severe of the two signals.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal wake severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveRating {
    Low = 1,
    Moderate = 2,
    High = 3,
}

impl WaveRating {
    /// Numeric tier value, 1 through 3.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for WaveRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Classification thresholds for energy density (J/m²) and impact force
/// (N/m²). Calibrated against the observed fleet; not physical constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingThresholds {
    /// Above this energy density the tier is at least Moderate.
    pub energy_low_jm2: f64,
    /// Above this energy density the tier is High.
    pub energy_medium_jm2: f64,
    /// Above this impact force the tier is at least Moderate.
    pub force_low_nm2: f64,
    /// Above this impact force the tier is High.
    pub force_medium_nm2: f64,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            energy_low_jm2: 150.0,
            energy_medium_jm2: 250.0,
            force_low_nm2: 45_000.0,
            force_medium_nm2: 55_000.0,
        }
    }
}

/// Classify an energy density into a tier.
pub fn classify_energy(energy_density_jm2: f64, thresholds: &RatingThresholds) -> WaveRating {
    if energy_density_jm2 > thresholds.energy_medium_jm2 {
        WaveRating::High
    } else if energy_density_jm2 > thresholds.energy_low_jm2 {
        WaveRating::Moderate
    } else {
        WaveRating::Low
    }
}

/// Classify an impact force into a tier.
pub fn classify_force(impact_force_nm2: f64, thresholds: &RatingThresholds) -> WaveRating {
    if impact_force_nm2 > thresholds.force_medium_nm2 {
        WaveRating::High
    } else if impact_force_nm2 > thresholds.force_low_nm2 {
        WaveRating::Moderate
    } else {
        WaveRating::Low
    }
}

/// Combined rating: the more severe of the two per-metric tiers. Either metric
/// alone can push the rating up; neither can pull it below the other's tier.
pub fn classify(
    energy_density_jm2: f64,
    impact_force_nm2: f64,
    thresholds: &RatingThresholds,
) -> WaveRating {
    let by_energy = classify_energy(energy_density_jm2, thresholds);
    let by_force = classify_force(impact_force_nm2, thresholds);
    by_energy.max(by_force)
}
