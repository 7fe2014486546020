//! Fixed-order CSV export of augmented vessel records.

use std::fs;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::error::Result;
use crate::record::{VesselRecord, TECHNICAL_FIELD_LABELS, WAKE_FIELD_LABELS};

/// Column order for the export: name, URL, the standard technical fields, the
/// computed wake fields, then any remaining labels present in any record,
/// sorted alphabetically.
pub fn export_headers(records: &[VesselRecord]) -> Vec<String> {
    let fixed = 2 + TECHNICAL_FIELD_LABELS.len() + WAKE_FIELD_LABELS.len();
    let mut headers: Vec<String> = Vec::with_capacity(fixed);
    headers.push("Name".to_string());
    headers.push("URL".to_string());
    headers.extend(TECHNICAL_FIELD_LABELS.iter().map(|label| label.to_string()));
    headers.extend(WAKE_FIELD_LABELS.iter().map(|label| label.to_string()));

    let mut extras: Vec<String> = records
        .iter()
        .flat_map(|record| record.fields.keys())
        .filter(|label| !headers.iter().any(|h| h == *label))
        .cloned()
        .collect();
    extras.sort();
    extras.dedup();
    headers.extend(extras);

    headers
}

/// Serialize records to CSV with the fixed column order; absent values render
/// as empty cells.
pub fn write_csv<W: Write>(records: &[VesselRecord], writer: W) -> Result<()> {
    let headers = export_headers(records);
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(&headers)?;

    for record in records {
        let row: Vec<&str> = headers
            .iter()
            .map(|header| match header.as_str() {
                "Name" => record.name.as_str(),
                "URL" => record.url.as_str(),
                label => record.fields.get(label).map(String::as_str).unwrap_or(""),
            })
            .collect();
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Serialize records to a CSV file at `path`.
pub fn write_csv_path(records: &[VesselRecord], path: &Path) -> Result<()> {
    let file = fs::File::create(path)?;
    write_csv(records, file)
}
