use std::fs;

use lakewake_lib::{
    attach_wave_metrics, export_headers, load_records, write_csv, VesselRecord, WakeConfig,
    WAKE_FIELD_LABELS,
};

const HARVEST_JSON: &str = r#"[
    {
        "name": "MS Albis",
        "url": "https://example.org/ms-albis",
        "fields": {
            "Length": "50,0 m",
            "Beam": "8,0 m",
            "Displacement (empty)": "300 t",
            "Engine": "2x diesel",
            "Passenger Capacity": "700"
        }
    },
    {
        "name": "MS Unvermessen",
        "url": "https://example.org/ms-unvermessen",
        "fields": {
            "Length": "35,0 m",
            "Beam": "7,5 m"
        }
    }
]"#;

fn harvested_records() -> Vec<VesselRecord> {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("vessels.json");
    fs::write(&path, HARVEST_JSON).expect("write harvest fixture");
    load_records(&path).expect("records load")
}

#[test]
fn batch_continues_past_incomplete_records() {
    let mut records = harvested_records();
    let config = WakeConfig::default();

    let augmented: Vec<bool> = records
        .iter_mut()
        .map(|record| attach_wave_metrics(record, &config))
        .collect();

    assert_eq!(augmented, vec![true, false]);
    assert_eq!(records[0].fields["Wave Rating"], "3");
    for label in WAKE_FIELD_LABELS {
        assert!(!records[1].fields.contains_key(*label));
    }
}

#[test]
fn csv_round_carries_fixed_columns_and_values() {
    let mut records = harvested_records();
    let config = WakeConfig::default();
    for record in &mut records {
        attach_wave_metrics(record, &config);
    }

    let mut buffer = Vec::new();
    write_csv(&records, &mut buffer).expect("csv writes");
    let text = String::from_utf8(buffer).expect("utf-8 output");
    let mut lines = text.lines();

    let header = lines.next().expect("header row");
    assert!(header.starts_with("Name,URL,Year Built,Shipyard,Displacement (empty)"));
    assert!(header.contains("Max Wave Height (m)"));
    assert!(header.contains("Wave Rating"));

    let first = lines.next().expect("first data row");
    assert!(first.starts_with("MS Albis,"));
    assert!(first.contains("0.75"));
    assert!(first.contains("91969"));
    assert!(first.contains(",3"));

    let second = lines.next().expect("second data row");
    assert!(second.starts_with("MS Unvermessen,"));
    assert!(!second.contains("0.75"));
}

#[test]
fn header_order_is_stable_across_field_presence() {
    let records = harvested_records();
    let headers = export_headers(&records);

    let name_pos = headers.iter().position(|h| h == "Name").unwrap();
    let length_pos = headers.iter().position(|h| h == "Length").unwrap();
    let rating_pos = headers.iter().position(|h| h == "Wave Rating").unwrap();
    assert!(name_pos < length_pos && length_pos < rating_pos);
}
