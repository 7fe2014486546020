//! Peak wave height and the energy, power, and force derived from it.
//!
//! The height formula is regime-dependent: the Froude-length number makes a
//! discrete choice between the displacement-mode and planing-mode
//! coefficients, and a shallow-water factor steepens the wave once the
//! Froude-depth number passes its critical threshold. Both are calibration
//! choices, carried in [`WakeModelConfig`] rather than hard-coded into the
//! formulas.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::constants::{
    DISPLACEMENT_HEIGHT_COEFFICIENT, GRAVITY, PLANING_FROUDE_LENGTH, PLANING_HEIGHT_COEFFICIENT,
    SHALLOW_WATER_FROUDE_DEPTH, WATER_DENSITY,
};
use super::kinematics::WakeKinematics;
use super::spec::VesselSpec;

/// Calibration values for the wave-height model.
///
/// The two regime coefficients and the shallow-water threshold are empirically
/// tuned for inland-lake passenger traffic, not first-principles results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WakeModelConfig {
    /// Height coefficient applied in displacement mode.
    pub displacement_coefficient: f64,
    /// Height coefficient applied in planing mode.
    pub planing_coefficient: f64,
    /// Froude-length number at which planing mode begins (inclusive).
    pub planing_froude_length: f64,
    /// Froude-depth number above which the shallow-water correction applies.
    pub shallow_water_froude_depth: f64,
}

impl Default for WakeModelConfig {
    fn default() -> Self {
        Self {
            displacement_coefficient: DISPLACEMENT_HEIGHT_COEFFICIENT,
            planing_coefficient: PLANING_HEIGHT_COEFFICIENT,
            planing_froude_length: PLANING_FROUDE_LENGTH,
            shallow_water_froude_depth: SHALLOW_WATER_FROUDE_DEPTH,
        }
    }
}

impl WakeModelConfig {
    /// Validate the calibration values.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (self.displacement_coefficient, "displacement_coefficient"),
            (self.planing_coefficient, "planing_coefficient"),
            (self.planing_froude_length, "planing_froude_length"),
            (self.shallow_water_froude_depth, "shallow_water_froude_depth"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::VesselDataValidation {
                    message: format!("{field} must be a finite positive number"),
                });
            }
        }

        Ok(())
    }
}

/// Hull operating regime selected by the Froude-length number.
///
/// A discrete choice, never a blend: below the threshold the hull is carried
/// by displacement, at or above it the hull planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HullRegime {
    Displacement,
    Planing,
}

impl HullRegime {
    /// Select the regime for a Froude-length number.
    pub fn from_froude_length(froude_length: f64, config: &WakeModelConfig) -> Self {
        if froude_length < config.planing_froude_length {
            HullRegime::Displacement
        } else {
            HullRegime::Planing
        }
    }

    fn height_coefficient(self, config: &WakeModelConfig) -> f64 {
        match self {
            HullRegime::Displacement => config.displacement_coefficient,
            HullRegime::Planing => config.planing_coefficient,
        }
    }
}

/// Amplification factor modeling wave steepening near the shallow-water
/// critical speed. Exactly 1.0 at or below the threshold.
pub fn shallow_water_factor(froude_depth: f64, config: &WakeModelConfig) -> f64 {
    if froude_depth > config.shallow_water_froude_depth {
        1.0 + (froude_depth - config.shallow_water_froude_depth)
    } else {
        1.0
    }
}

/// Peak wave height and the quantities derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WakeEnergetics {
    /// Regime that selected the height coefficient.
    pub regime: HullRegime,
    /// Peak wave height in metres, after any shallow-water correction.
    pub max_wave_height_m: f64,
    /// Wave energy per square metre of surface in J/m².
    pub wave_energy_density_jm2: f64,
    /// Radiated power per metre of wave front in W/m.
    pub wave_power_wm: f64,
    /// Impact force per square metre in N/m².
    pub impact_force_nm2: f64,
}

/// Compute peak wave height and derived energetics.
///
/// `height = coeff * displacement_t * speed_ms^2 / (length * beam)`, scaled by
/// the shallow-water factor, then:
/// - `energy = rho * g * height^2 / 8`
/// - `power = energy * wave_velocity`
/// - `force = rho * g * height * wave_velocity^2 / 2`
///
/// A zero height (zero speed) propagates to zero energy, power, and force;
/// degenerate but valid.
pub fn compute_energetics(
    spec: &VesselSpec,
    kinematics: &WakeKinematics,
    config: &WakeModelConfig,
) -> Result<WakeEnergetics> {
    config.validate()?;
    spec.validate()?;

    let regime = HullRegime::from_froude_length(kinematics.froude_length, config);
    let base_height = regime.height_coefficient(config) * spec.displacement_t
        * kinematics.speed_ms.powi(2)
        / (spec.length_m * spec.beam_m);
    let max_wave_height_m = base_height * shallow_water_factor(kinematics.froude_depth, config);

    let wave_energy_density_jm2 = WATER_DENSITY * GRAVITY * max_wave_height_m.powi(2) / 8.0;
    let wave_power_wm = wave_energy_density_jm2 * kinematics.wave_velocity_mps;
    let impact_force_nm2 =
        WATER_DENSITY * GRAVITY * max_wave_height_m * kinematics.wave_velocity_mps.powi(2) / 2.0;

    if !max_wave_height_m.is_finite() || !impact_force_nm2.is_finite() {
        return Err(Error::WakeComputation {
            message: "wave height or impact force came out non-finite".to_string(),
        });
    }

    Ok(WakeEnergetics {
        regime,
        max_wave_height_m,
        wave_energy_density_jm2,
        wave_power_wm,
        impact_force_nm2,
    })
}
