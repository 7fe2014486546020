//! Station catalog consistency checking.
//!
//! A standalone integrity check, unrelated to the wake engine: it
//! cross-references the structured station catalog (grouped by lake) against
//! literal `Station::new(...)` occurrences found in source text files, and
//! reports stations that are missing from the catalog or whose coordinates
//! drift beyond tolerance.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Tolerance in degrees for coordinate comparisons; differences below this
/// are treated as floating-point noise.
pub const COORDINATE_TOLERANCE_DEG: f64 = 0.001;

/// Literal constructor pattern extracted from source files.
const OCCURRENCE_PATTERN: &str = "Station::new(";

/// File extensions scanned for literal station definitions.
const SOURCE_EXTENSIONS: &[&str] = &["rs"];

/// Geographic coordinates of a station.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One station entry in the catalog: either a bare name or a full object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StationEntry {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        uic_ref: Option<String>,
        #[serde(default)]
        coordinates: Option<Coordinates>,
    },
}

/// Stations grouped by the body of water they serve.
#[derive(Debug, Clone, Deserialize)]
pub struct Lake {
    pub name: String,
    pub stations: Vec<StationEntry>,
}

/// Structured station catalog, grouped by lake.
#[derive(Debug, Clone, Deserialize)]
pub struct StationCatalog {
    pub lakes: Vec<Lake>,
}

/// A catalog station flattened out of its lake grouping.
#[derive(Debug, Clone)]
pub struct CatalogStation {
    pub name: String,
    pub uic_ref: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub lake: String,
}

impl StationCatalog {
    /// Load a station catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a station catalog from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let catalog: StationCatalog = serde_json::from_reader(reader)?;
        if catalog.lakes.is_empty() {
            return Err(Error::StationCatalog {
                message: "catalog contains no lakes".to_string(),
            });
        }
        Ok(catalog)
    }

    /// Flatten all entries into catalog stations carrying their lake name.
    pub fn stations(&self) -> Vec<CatalogStation> {
        self.lakes
            .iter()
            .flat_map(|lake| {
                lake.stations.iter().map(move |entry| match entry {
                    StationEntry::Name(name) => CatalogStation {
                        name: name.clone(),
                        uic_ref: None,
                        coordinates: None,
                        lake: lake.name.clone(),
                    },
                    StationEntry::Detailed {
                        name,
                        uic_ref,
                        coordinates,
                    } => CatalogStation {
                        name: name.clone(),
                        uic_ref: uic_ref.clone(),
                        coordinates: *coordinates,
                        lake: lake.name.clone(),
                    },
                })
            })
            .collect()
    }
}

/// A literal station constructor found in a source file.
#[derive(Debug, Clone, PartialEq)]
pub struct StationOccurrence {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub uic_ref: Option<String>,
    pub file: PathBuf,
}

/// A station whose literal coordinates disagree with the catalog.
#[derive(Debug, Clone)]
pub struct CoordinateMismatch {
    pub name: String,
    pub occurrence: Coordinates,
    pub catalog: Coordinates,
    pub file: PathBuf,
}

/// Outcome of cross-referencing the catalog against literal occurrences.
#[derive(Debug, Default)]
pub struct ConsistencyReport {
    pub catalog_total: usize,
    pub occurrence_total: usize,
    pub missing_from_catalog: Vec<StationOccurrence>,
    pub coordinate_mismatches: Vec<CoordinateMismatch>,
}

impl ConsistencyReport {
    /// True when every literal station matched the catalog within tolerance.
    pub fn is_consistent(&self) -> bool {
        self.missing_from_catalog.is_empty() && self.coordinate_mismatches.is_empty()
    }
}

/// Recursively scan source files under the given roots for literal station
/// constructors.
pub fn scan_sources(roots: &[PathBuf]) -> Result<Vec<StationOccurrence>> {
    let mut occurrences = Vec::new();
    for root in roots {
        scan_path(root, &mut occurrences)?;
    }
    Ok(occurrences)
}

fn scan_path(path: &Path, occurrences: &mut Vec<StationOccurrence>) -> Result<()> {
    if path.is_dir() {
        for entry in fs::read_dir(path)? {
            scan_path(&entry?.path(), occurrences)?;
        }
        return Ok(());
    }

    let is_source = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SOURCE_EXTENSIONS.contains(&ext))
        .unwrap_or(false);
    if !is_source {
        return Ok(());
    }

    let content = fs::read_to_string(path)?;
    let found = extract_occurrences(&content, path);
    debug!(file = %path.display(), count = found.len(), "scanned source file");
    occurrences.extend(found);
    Ok(())
}

/// Pull every parseable `Station::new("id", "name", lat, lon, "uic")` literal
/// out of a source text. Occurrences that do not match the literal shape are
/// ignored rather than reported as errors.
fn extract_occurrences(content: &str, file: &Path) -> Vec<StationOccurrence> {
    let mut found = Vec::new();
    let mut rest = content;

    while let Some(start) = rest.find(OCCURRENCE_PATTERN) {
        let after = &rest[start + OCCURRENCE_PATTERN.len()..];
        match after.find(')') {
            Some(end) => {
                if let Some(occurrence) = parse_arguments(&after[..end], file) {
                    found.push(occurrence);
                }
                rest = &after[end + 1..];
            }
            None => break,
        }
    }

    found
}

fn parse_arguments(args: &str, file: &Path) -> Option<StationOccurrence> {
    let parts = split_arguments(args);
    if parts.len() != 5 {
        return None;
    }

    let id = unquote(&parts[0])?;
    let name = unquote(&parts[1])?;
    let latitude: f64 = parts[2].trim().parse().ok()?;
    let longitude: f64 = parts[3].trim().parse().ok()?;
    let uic = unquote(&parts[4])?;

    Some(StationOccurrence {
        id,
        name,
        latitude,
        longitude,
        uic_ref: (!uic.is_empty()).then_some(uic),
        file: file.to_path_buf(),
    })
}

/// Split an argument list on commas outside string literals.
fn split_arguments(args: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_string = false;

    for c in args.chars() {
        match c {
            '"' => {
                in_string = !in_string;
                current.push(c);
            }
            ',' if !in_string => {
                parts.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    parts.push(current);
    parts
}

fn unquote(part: &str) -> Option<String> {
    let trimmed = part.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .map(|s| s.to_string())
}

/// Cross-reference literal occurrences against the catalog.
///
/// Occurrences match by name first, then by reference code. Matched stations
/// with catalog coordinates are compared within
/// [`COORDINATE_TOLERANCE_DEG`]; catalog entries without coordinates are
/// accepted as-is.
pub fn check_consistency(
    catalog: &StationCatalog,
    occurrences: &[StationOccurrence],
) -> ConsistencyReport {
    let stations = catalog.stations();
    let by_name: HashMap<&str, &CatalogStation> =
        stations.iter().map(|s| (s.name.as_str(), s)).collect();
    let by_uic: HashMap<&str, &CatalogStation> = stations
        .iter()
        .filter_map(|s| s.uic_ref.as_deref().map(|uic| (uic, s)))
        .collect();

    let mut report = ConsistencyReport {
        catalog_total: stations.len(),
        occurrence_total: occurrences.len(),
        ..ConsistencyReport::default()
    };

    for occurrence in occurrences {
        let station = by_name.get(occurrence.name.as_str()).copied().or_else(|| {
            occurrence
                .uic_ref
                .as_deref()
                .and_then(|uic| by_uic.get(uic).copied())
        });

        let Some(station) = station else {
            report.missing_from_catalog.push(occurrence.clone());
            continue;
        };

        if let Some(catalog_coords) = station.coordinates {
            let lat_diff = (catalog_coords.latitude - occurrence.latitude).abs();
            let lon_diff = (catalog_coords.longitude - occurrence.longitude).abs();
            if lat_diff > COORDINATE_TOLERANCE_DEG || lon_diff > COORDINATE_TOLERANCE_DEG {
                report.coordinate_mismatches.push(CoordinateMismatch {
                    name: occurrence.name.clone(),
                    occurrence: Coordinates {
                        latitude: occurrence.latitude,
                        longitude: occurrence.longitude,
                    },
                    catalog: catalog_coords,
                    file: occurrence.file.clone(),
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"{
        "lakes": [
            {
                "name": "Lake Zurich",
                "stations": [
                    "Kilchberg",
                    {
                        "name": "Thalwil",
                        "uic_ref": "8503674",
                        "coordinates": {"latitude": 47.2921, "longitude": 8.5651}
                    }
                ]
            }
        ]
    }"#;

    fn catalog() -> StationCatalog {
        StationCatalog::from_reader(CATALOG_JSON.as_bytes()).expect("catalog parses")
    }

    fn occurrence(name: &str, lat: f64, lon: f64, uic: &str) -> StationOccurrence {
        StationOccurrence {
            id: name.to_ascii_lowercase(),
            name: name.to_string(),
            latitude: lat,
            longitude: lon,
            uic_ref: (!uic.is_empty()).then(|| uic.to_string()),
            file: PathBuf::from("src/stations.rs"),
        }
    }

    #[test]
    fn flattens_bare_and_detailed_entries() {
        let stations = catalog().stations();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].name, "Kilchberg");
        assert!(stations[0].coordinates.is_none());
        assert_eq!(stations[1].uic_ref.as_deref(), Some("8503674"));
        assert_eq!(stations[1].lake, "Lake Zurich");
    }

    #[test]
    fn matching_occurrences_are_consistent() {
        let occurrences = vec![occurrence("Thalwil", 47.2921, 8.5651, "8503674")];
        let report = check_consistency(&catalog(), &occurrences);
        assert!(report.is_consistent());
        assert_eq!(report.catalog_total, 2);
        assert_eq!(report.occurrence_total, 1);
    }

    #[test]
    fn unknown_station_is_reported_missing() {
        let occurrences = vec![occurrence("Atlantis", 0.0, 0.0, "")];
        let report = check_consistency(&catalog(), &occurrences);
        assert!(!report.is_consistent());
        assert_eq!(report.missing_from_catalog.len(), 1);
    }

    #[test]
    fn coordinate_drift_beyond_tolerance_is_reported() {
        let occurrences = vec![occurrence("Thalwil", 47.2999, 8.5651, "8503674")];
        let report = check_consistency(&catalog(), &occurrences);
        assert_eq!(report.coordinate_mismatches.len(), 1);
        assert_eq!(report.coordinate_mismatches[0].name, "Thalwil");
    }

    #[test]
    fn small_coordinate_noise_is_tolerated() {
        let occurrences = vec![occurrence("Thalwil", 47.29209, 8.56511, "8503674")];
        let report = check_consistency(&catalog(), &occurrences);
        assert!(report.is_consistent());
    }

    #[test]
    fn occurrences_extract_from_source_text() {
        let source = r#"
            let stations = vec![
                Station::new("thalwil", "Thalwil", 47.2921, 8.5651, "8503674"),
                Station::new("kilchberg", "Kilchberg", 47.3246, 8.5448, ""),
            ];
        "#;

        let found = extract_occurrences(source, Path::new("demo.rs"));
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "Thalwil");
        assert_eq!(found[0].uic_ref.as_deref(), Some("8503674"));
        assert_eq!(found[1].uic_ref, None);
    }

    #[test]
    fn malformed_literals_are_ignored() {
        let source = r#"Station::new("only", "four", 1.0)"#;
        let found = extract_occurrences(source, Path::new("demo.rs"));
        assert!(found.is_empty());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = StationCatalog::from_reader(r#"{"lakes": []}"#.as_bytes())
            .expect_err("empty catalog rejected");
        assert!(matches!(err, Error::StationCatalog { .. }));
    }
}
