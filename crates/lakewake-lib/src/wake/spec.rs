//! Vessel input values consumed by the wake pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::constants::{DEFAULT_SPEED_KMH, DEFAULT_WATER_DEPTH_M};

/// Hull and operating parameters for a single vessel.
///
/// A spec is constructed once per raw record, validated, consumed by one
/// computation run, and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VesselSpec {
    /// Hull length in metres (> 0).
    pub length_m: f64,
    /// Hull beam in metres (> 0).
    pub beam_m: f64,
    /// Cruising speed in km/h (>= 0).
    pub speed_kmh: f64,
    /// Empty displacement in tonnes (> 0).
    pub displacement_t: f64,
    /// Water depth in metres (> 0); defaults to the lake's representative depth.
    pub depth_m: f64,
}

impl VesselSpec {
    /// Build a spec at the lake's reference speed and representative depth.
    pub fn at_reference_conditions(length_m: f64, beam_m: f64, displacement_t: f64) -> Self {
        Self {
            length_m,
            beam_m,
            speed_kmh: DEFAULT_SPEED_KMH,
            displacement_t,
            depth_m: DEFAULT_WATER_DEPTH_M,
        }
    }

    /// Validate vessel parameters for correctness.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            (self.length_m, "length_m"),
            (self.beam_m, "beam_m"),
            (self.displacement_t, "displacement_t"),
            (self.depth_m, "depth_m"),
        ];

        for (value, field) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::VesselDataValidation {
                    message: format!("{field} must be a finite positive number, got {value}"),
                });
            }
        }

        if !self.speed_kmh.is_finite() || self.speed_kmh < 0.0 {
            return Err(Error::VesselDataValidation {
                message: format!(
                    "speed_kmh must be finite and non-negative, got {}",
                    self.speed_kmh
                ),
            });
        }

        Ok(())
    }
}
