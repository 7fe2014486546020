//! Check-stations command handler: catalog consistency check.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use lakewake_lib::{check_consistency, scan_sources, ConsistencyReport, StationCatalog};

/// Handle the check-stations subcommand.
///
/// Fails (nonzero exit) when any literal station is missing from the catalog
/// or its coordinates drift beyond tolerance.
pub fn handle_check_stations(catalog_path: &Path, sources: &[PathBuf]) -> Result<()> {
    let catalog = StationCatalog::from_path(catalog_path).with_context(|| {
        format!("failed to load station catalog from {}", catalog_path.display())
    })?;
    let occurrences = scan_sources(sources).context("failed to scan source files")?;

    let report = check_consistency(&catalog, &occurrences);
    print_report(&report);

    if report.is_consistent() {
        Ok(())
    } else {
        bail!("station catalog inconsistencies found")
    }
}

fn print_report(report: &ConsistencyReport) {
    println!("Stations in catalog: {}", report.catalog_total);
    println!("Literal stations found: {}", report.occurrence_total);

    for missing in &report.missing_from_catalog {
        println!(
            "missing from catalog: {} ({})",
            missing.name,
            missing.file.display()
        );
    }

    for mismatch in &report.coordinate_mismatches {
        println!(
            "coordinate mismatch for {}: source {:.4}, {:.4} vs catalog {:.4}, {:.4} ({})",
            mismatch.name,
            mismatch.occurrence.latitude,
            mismatch.occurrence.longitude,
            mismatch.catalog.latitude,
            mismatch.catalog.longitude,
            mismatch.file.display()
        );
    }

    if report.is_consistent() {
        println!("All literal stations are consistent with the catalog.");
    }
}
