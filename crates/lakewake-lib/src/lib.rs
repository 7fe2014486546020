//! Lakewake library entry points.
//!
//! This crate derives wake-severity indicators for lake passenger vessels
//! from basic hull and operating parameters: regime numbers, wave geometry,
//! energy density, radiated power, impact force, and a 1-3 severity rating.
//! Around the engine it handles harvested vessel records, fixed-order CSV
//! export, and a standalone station-catalog consistency check. Higher-level
//! consumers (the CLI) should only depend on the items exported here.

#![deny(warnings)]

pub mod error;
pub mod export;
pub mod record;
pub mod stations;
pub mod wake;

pub use error::{Error, Result};
pub use export::{export_headers, write_csv, write_csv_path};
pub use record::{
    attach_wave_metrics, formatted_metric_fields, load_records, records_from_reader, VesselRecord,
    TECHNICAL_FIELD_LABELS, WAKE_FIELD_LABELS,
};
pub use stations::{
    check_consistency, scan_sources, ConsistencyReport, StationCatalog, StationOccurrence,
};
pub use wake::{
    compute_wave_metrics, parse_quantity, HullRegime, RatingThresholds, VesselSpec, WakeConfig,
    WakeModelConfig, WaveMetrics, WaveRating,
};
