//! Raw harvester records and the per-record wake augmentation step.
//!
//! The harvester's network side stays external; this module consumes its
//! already-materialized output, a JSON array of records mapping free-text
//! field labels to free-text values. Labels are matched through normalization
//! plus synonym lists so minor label variants resolve without exact-string
//! coupling.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::error::Result;
use crate::wake::{compute_wave_metrics, parse_quantity, VesselSpec, WakeConfig, WaveMetrics};

/// One vessel as produced by the harvester: a name, the source URL, and the
/// technical fields keyed by their page labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselRecord {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

/// Labels of the standard technical fields reported by the harvester, in the
/// order they are exported.
pub const TECHNICAL_FIELD_LABELS: &[&str] = &[
    "Year Built",
    "Shipyard",
    "Displacement (empty)",
    "Engine",
    "Drive",
    "Power",
    "Length",
    "Beam",
    "Crew",
    "Passenger Capacity",
];

/// Labels of the computed wake fields, in the order they are exported.
pub const WAKE_FIELD_LABELS: &[&str] = &[
    "Max Wave Height (m)",
    "Wavelength (m)",
    "Wave Period (s)",
    "Wave Velocity (m/s)",
    "Wave Energy (J/m²)",
    "Wave Power (W/m)",
    "Impact Force (N/m²)",
    "Froude Length Number",
    "Froude Depth Number",
    "Kelvin Angle (deg)",
    "Wave Rating",
];

// Normalized label synonyms for the physical inputs.
const LENGTH_LABELS: &[&str] = &["length", "lengthoverall", "loa"];
const BEAM_LABELS: &[&str] = &["beam", "breadth", "width"];
const DISPLACEMENT_LABELS: &[&str] = &["displacementempty", "displacement"];
const SPEED_LABELS: &[&str] = &["speed", "cruisingspeed", "servicespeed"];
const DEPTH_LABELS: &[&str] = &["waterdepth", "depth"];

/// Normalize a field label for robust matching: lowercase, alphanumerics only.
fn normalize_label(label: &str) -> String {
    label
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

impl VesselRecord {
    /// Look up a field value by any of the given normalized label synonyms.
    fn field_by_labels(&self, synonyms: &[&str]) -> Option<&str> {
        for synonym in synonyms {
            for (label, value) in &self.fields {
                if normalize_label(label) == *synonym {
                    return Some(value.as_str());
                }
            }
        }
        None
    }

    /// Look up and normalize a numeric field; `None` when absent or
    /// unparseable.
    fn numeric_field(&self, synonyms: &[&str]) -> Option<f64> {
        self.field_by_labels(synonyms).and_then(parse_quantity)
    }
}

/// Load vessel records from a harvester output file.
pub fn load_records(path: &Path) -> Result<Vec<VesselRecord>> {
    let file = fs::File::open(path)?;
    records_from_reader(file)
}

/// Load vessel records from a reader (e.g. file or in-memory buffer).
pub fn records_from_reader<R: Read>(reader: R) -> Result<Vec<VesselRecord>> {
    let records: Vec<VesselRecord> = serde_json::from_reader(reader)?;
    Ok(records)
}

/// Normalize the required inputs, run the wake pipeline, and merge the
/// formatted metric fields into the record.
///
/// Returns `false` without touching the record when length, beam, or
/// displacement is missing or zero, or when the computation itself fails;
/// either way the batch continues. Speed and depth fall back to the defaults
/// carried by `config` when absent.
pub fn attach_wave_metrics(record: &mut VesselRecord, config: &WakeConfig) -> bool {
    let length = record.numeric_field(LENGTH_LABELS);
    let beam = record.numeric_field(BEAM_LABELS);
    let displacement = record.numeric_field(DISPLACEMENT_LABELS);

    let (length_m, beam_m, displacement_t) = match (length, beam, displacement) {
        (Some(l), Some(b), Some(d)) if l > 0.0 && b > 0.0 && d > 0.0 => (l, b, d),
        _ => {
            warn!(
                vessel = %record.name,
                "skipping wake metrics: length, beam, or displacement missing or zero"
            );
            return false;
        }
    };

    let spec = VesselSpec {
        length_m,
        beam_m,
        speed_kmh: record
            .numeric_field(SPEED_LABELS)
            .unwrap_or(config.default_speed_kmh),
        displacement_t,
        depth_m: record
            .numeric_field(DEPTH_LABELS)
            .unwrap_or(config.default_depth_m),
    };

    match compute_wave_metrics(&spec, config) {
        Ok(metrics) => {
            for (label, value) in formatted_metric_fields(&metrics) {
                record.fields.insert(label, value);
            }
            debug!(vessel = %record.name, "wake metrics attached");
            true
        }
        Err(err) => {
            error!(vessel = %record.name, error = %err, "wake computation failed");
            false
        }
    }
}

/// Render the computed metrics as labeled text fields at the fixed output
/// precision, in the order of [`WAKE_FIELD_LABELS`].
pub fn formatted_metric_fields(metrics: &WaveMetrics) -> Vec<(String, String)> {
    let values = [
        format!("{:.2}", metrics.max_wave_height_m),
        format!("{:.1}", metrics.wavelength_m),
        format!("{:.1}", metrics.wave_period_s),
        format!("{:.1}", metrics.wave_velocity_mps),
        format!("{:.0}", metrics.wave_energy_density_jm2),
        format!("{:.0}", metrics.wave_power_wm),
        format!("{:.0}", metrics.impact_force_nm2),
        format!("{:.3}", metrics.froude_length),
        format!("{:.3}", metrics.froude_depth),
        format!("{:.1}", metrics.kelvin_angle_deg),
        metrics.rating.to_string(),
    ];

    WAKE_FIELD_LABELS
        .iter()
        .map(|label| label.to_string())
        .zip(values)
        .collect()
}
