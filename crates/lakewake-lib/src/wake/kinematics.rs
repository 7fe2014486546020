//! Dimensionless regime numbers and wave geometry.
//!
//! All quantities here follow from speed, hull length, and water depth by
//! closed-form expressions; there is no branching. The wavelength uses the
//! deep-water dispersion approximation and is depth-independent by
//! construction.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::constants::{kelvin_wake_angle_deg, GRAVITY, KINEMATIC_VISCOSITY};
use super::spec::VesselSpec;

/// Kinematic quantities derived from a validated vessel spec.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WakeKinematics {
    /// Vessel speed converted to m/s.
    pub speed_ms: f64,
    /// Froude number by hull length: selects displacement vs planing regime.
    pub froude_length: f64,
    /// Froude number by water depth: drives the shallow-water correction.
    pub froude_depth: f64,
    /// Reynolds number; reported, never branched on.
    pub reynolds: f64,
    /// Kelvin wake half-angle in degrees. Constant for every input.
    pub kelvin_angle_deg: f64,
    /// Transverse wavelength in metres (deep-water dispersion).
    pub wavelength_m: f64,
    /// Wave period in seconds.
    pub wave_period_s: f64,
    /// Phase velocity in m/s.
    pub wave_velocity_mps: f64,
}

/// Compute regime numbers and deep-water wave geometry.
///
/// Formulas:
/// - `speed_ms = speed_kmh / 3.6`
/// - `froude_length = speed_ms / sqrt(g * length)`
/// - `froude_depth = speed_ms / sqrt(g * depth)`
/// - `reynolds = length * speed_ms / nu`
/// - `wavelength = 2 * pi * speed_ms^2 / g`
/// - `period = sqrt(2 * pi * wavelength / g)`
/// - `velocity = wavelength / period`
///
/// # Errors
/// Returns a validation error for non-physical inputs, or a computation error
/// if any derived quantity comes out non-finite (e.g. a zero-speed spec, where
/// the phase velocity is undefined).
pub fn compute_kinematics(spec: &VesselSpec) -> Result<WakeKinematics> {
    spec.validate()?;

    let speed_ms = spec.speed_kmh / 3.6;
    let froude_length = speed_ms / (GRAVITY * spec.length_m).sqrt();
    let froude_depth = speed_ms / (GRAVITY * spec.depth_m).sqrt();
    let reynolds = spec.length_m * speed_ms / KINEMATIC_VISCOSITY;

    let wavelength_m = 2.0 * std::f64::consts::PI * speed_ms.powi(2) / GRAVITY;
    let wave_period_s = (2.0 * std::f64::consts::PI * wavelength_m / GRAVITY).sqrt();
    let wave_velocity_mps = wavelength_m / wave_period_s;

    let kinematics = WakeKinematics {
        speed_ms,
        froude_length,
        froude_depth,
        reynolds,
        kelvin_angle_deg: kelvin_wake_angle_deg(),
        wavelength_m,
        wave_period_s,
        wave_velocity_mps,
    };

    for (value, name) in [
        (kinematics.froude_length, "froude_length"),
        (kinematics.froude_depth, "froude_depth"),
        (kinematics.reynolds, "reynolds"),
        (kinematics.wavelength_m, "wavelength"),
        (kinematics.wave_period_s, "wave_period"),
        (kinematics.wave_velocity_mps, "wave_velocity"),
    ] {
        if !value.is_finite() {
            return Err(Error::WakeComputation {
                message: format!("{name} came out non-finite"),
            });
        }
    }

    Ok(kinematics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_vessel_kinematics() {
        let spec = VesselSpec::at_reference_conditions(50.0, 8.0, 300.0);
        let k = compute_kinematics(&spec).expect("valid spec computes");

        assert!((k.speed_ms - 5.0).abs() < 1e-12);
        assert!((k.froude_length - 0.2258).abs() < 1e-4);
        assert!((k.froude_depth - 0.5048).abs() < 1e-4);
        assert!((k.reynolds - 2.5e8).abs() < 1.0);
        assert!((k.wavelength_m - 16.012).abs() < 1e-3);
        assert!((k.wave_period_s - 3.2025).abs() < 1e-4);
        assert!((k.wave_velocity_mps - 5.0).abs() < 1e-9);
    }

    #[test]
    fn kelvin_angle_is_input_independent() {
        let slow = VesselSpec::at_reference_conditions(20.0, 5.0, 80.0);
        let fast = VesselSpec {
            speed_kmh: 60.0,
            ..VesselSpec::at_reference_conditions(12.0, 3.5, 9.0)
        };

        let a = compute_kinematics(&slow).unwrap().kelvin_angle_deg;
        let b = compute_kinematics(&fast).unwrap().kelvin_angle_deg;
        assert_eq!(a, b);
        assert!((a - 19.4712).abs() < 1e-4);
    }

    #[test]
    fn zero_speed_is_a_computation_error() {
        let mut spec = VesselSpec::at_reference_conditions(50.0, 8.0, 300.0);
        spec.speed_kmh = 0.0;
        let err = compute_kinematics(&spec).expect_err("phase velocity undefined at rest");
        assert!(matches!(err, Error::WakeComputation { .. }));
    }
}
