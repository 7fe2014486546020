//! Physical constants and calibration defaults used across wake calculations.

/// Gravitational acceleration in m/s².
pub const GRAVITY: f64 = 9.81;

/// Density of fresh water in kg/m³.
pub const WATER_DENSITY: f64 = 1000.0;

/// Kinematic viscosity of water in m²/s.
pub const KINEMATIC_VISCOSITY: f64 = 1.0e-6;

/// Representative water depth for the target lake in metres.
pub const DEFAULT_WATER_DEPTH_M: f64 = 10.0;

/// Reference cruising speed in km/h, used when a record carries no speed field.
pub const DEFAULT_SPEED_KMH: f64 = 18.0;

/// Froude-length number at which a hull transitions from displacement to
/// planing mode.
pub const PLANING_FROUDE_LENGTH: f64 = 0.4;

/// Froude-depth number above which the shallow-water height correction applies.
pub const SHALLOW_WATER_FROUDE_DEPTH: f64 = 0.7;

/// Wave-height coefficient for displacement-mode hulls.
///
/// Calibrated against observed lake traffic, not derived from first principles;
/// see [`super::energetics::WakeModelConfig`] for re-calibration.
pub const DISPLACEMENT_HEIGHT_COEFFICIENT: f64 = 0.04;

/// Wave-height coefficient for planing-mode hulls. Half the displacement
/// coefficient: planing hulls shed proportionally less displacement-driven
/// wake energy under this calibration.
pub const PLANING_HEIGHT_COEFFICIENT: f64 = 0.02;

/// Kelvin wake half-angle in degrees: arcsin(1/3) ≈ 19.4712. A property of
/// deep-water gravity waves, independent of hull and speed.
pub fn kelvin_wake_angle_deg() -> f64 {
    (1.0_f64 / 3.0).asin().to_degrees()
}
