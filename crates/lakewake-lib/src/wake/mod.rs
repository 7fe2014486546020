//! Wake physics and severity classification.
//!
//! This module is organized into focused submodules:
//!
//! - [`units`] - lenient parsing of loosely formatted numeric tokens
//! - [`spec`] - vessel input values and validation
//! - [`kinematics`] - dimensionless regime numbers and wave geometry
//! - [`energetics`] - wave height, energy density, power, impact force
//! - [`rating`] - three-tier severity classification
//! - [`metrics`] - pipeline assembly into [`WaveMetrics`]
//! - [`constants`] - shared physical constants and calibration defaults
//!
//! # Example
//!
//! ```
//! use lakewake_lib::wake::{compute_wave_metrics, VesselSpec, WakeConfig};
//!
//! let spec = VesselSpec::at_reference_conditions(50.0, 8.0, 300.0);
//! let metrics = compute_wave_metrics(&spec, &WakeConfig::default()).unwrap();
//! assert_eq!(metrics.rating.as_u8(), 3);
//! ```

pub mod constants;
pub mod energetics;
pub mod kinematics;
pub mod metrics;
pub mod rating;
pub mod spec;
pub mod units;

pub use constants::{kelvin_wake_angle_deg, DEFAULT_SPEED_KMH, DEFAULT_WATER_DEPTH_M};
pub use energetics::{
    compute_energetics, shallow_water_factor, HullRegime, WakeEnergetics, WakeModelConfig,
};
pub use kinematics::{compute_kinematics, WakeKinematics};
pub use metrics::{compute_wave_metrics, WakeConfig, WaveMetrics};
pub use rating::{classify, classify_energy, classify_force, RatingThresholds, WaveRating};
pub use spec::VesselSpec;
pub use units::parse_quantity;
