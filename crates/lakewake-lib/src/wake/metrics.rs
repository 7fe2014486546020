//! Wake metric assembly: kinematics, energetics, then classification.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::constants::{DEFAULT_SPEED_KMH, DEFAULT_WATER_DEPTH_M};
use super::energetics::{compute_energetics, HullRegime, WakeModelConfig};
use super::kinematics::compute_kinematics;
use super::rating::{classify, RatingThresholds, WaveRating};
use super::spec::VesselSpec;

/// Configuration for a full wake computation run: height-model calibration,
/// classification thresholds, and the fallback operating conditions assumed
/// for records that carry no speed or depth field. `Default` carries the
/// tuned values and the lake reference conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WakeConfig {
    pub model: WakeModelConfig,
    pub thresholds: RatingThresholds,
    /// Speed in km/h assumed when a record has no speed field.
    pub default_speed_kmh: f64,
    /// Water depth in metres assumed when a record has no depth field.
    pub default_depth_m: f64,
}

impl Default for WakeConfig {
    fn default() -> Self {
        Self {
            model: WakeModelConfig::default(),
            thresholds: RatingThresholds::default(),
            default_speed_kmh: DEFAULT_SPEED_KMH,
            default_depth_m: DEFAULT_WATER_DEPTH_M,
        }
    }
}

/// Complete set of wake indicators derived from one vessel spec.
///
/// Immutable once produced; each computation run is stateless and independent
/// of prior runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveMetrics {
    pub max_wave_height_m: f64,
    pub froude_length: f64,
    pub froude_depth: f64,
    pub reynolds: f64,
    pub kelvin_angle_deg: f64,
    pub wavelength_m: f64,
    pub wave_period_s: f64,
    pub wave_velocity_mps: f64,
    pub wave_energy_density_jm2: f64,
    pub wave_power_wm: f64,
    pub impact_force_nm2: f64,
    pub regime: HullRegime,
    pub rating: WaveRating,
}

/// Run the wake pipeline for a single vessel.
///
/// # Errors
/// Returns a validation error for non-physical inputs and a computation error
/// if any derived quantity comes out non-finite. Callers processing batches
/// treat either as a per-record condition, not a fatal one.
pub fn compute_wave_metrics(spec: &VesselSpec, config: &WakeConfig) -> Result<WaveMetrics> {
    let kinematics = compute_kinematics(spec)?;
    let energetics = compute_energetics(spec, &kinematics, &config.model)?;
    let rating = classify(
        energetics.wave_energy_density_jm2,
        energetics.impact_force_nm2,
        &config.thresholds,
    );

    Ok(WaveMetrics {
        max_wave_height_m: energetics.max_wave_height_m,
        froude_length: kinematics.froude_length,
        froude_depth: kinematics.froude_depth,
        reynolds: kinematics.reynolds,
        kelvin_angle_deg: kinematics.kelvin_angle_deg,
        wavelength_m: kinematics.wavelength_m,
        wave_period_s: kinematics.wave_period_s,
        wave_velocity_mps: kinematics.wave_velocity_mps,
        wave_energy_density_jm2: energetics.wave_energy_density_jm2,
        wave_power_wm: energetics.wave_power_wm,
        impact_force_nm2: energetics.impact_force_nm2,
        regime: energetics.regime,
        rating,
    })
}
