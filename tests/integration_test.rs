use district_stats::{audit, summary};
use std::io::{Cursor, Read, Seek, SeekFrom};
use std::path::Path;

const DISTRICTS: &str = "./tests/data/districts.json";
const METADATA: &str = "./tests/data/metadata.json";

fn get_string(cursor: &mut Cursor<Vec<u8>>) -> String {
    cursor.seek(SeekFrom::Start(0)).unwrap();
    let mut out = Vec::new();
    cursor.read_to_end(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn summary_reports_counts_and_rings() {
    let mut cursor = Cursor::new(Vec::new());
    summary(Path::new(DISTRICTS), &mut cursor).unwrap();

    let string = get_string(&mut cursor);
    assert!(string.contains("Total features: 3\n"));
    assert!(string.contains("Unique districts: 2\n"));
    assert!(string.contains("Duplicates: 1\n"));
    assert!(string.contains("Duplicate keys: [CA-1]\n"));
    assert!(string.contains("Total coordinates: 15\n"));
    assert!(string.contains("Average per district: 5\n"));
    assert!(string.contains("Max per district: 6\n"));
    assert!(string.contains("Min per district: 4\n"));
}

#[test]
fn summary_describes_the_first_feature() {
    let mut cursor = Cursor::new(Vec::new());
    summary(Path::new(DISTRICTS), &mut cursor).unwrap();

    let string = get_string(&mut cursor);
    assert!(string.contains("  state: string = CA\n"));
    assert!(string.contains("  district: string = 1\n"));
    assert!(string.contains("  name: string = California District 1\n"));
    assert!(string.contains("  population: number = 760000\n"));
}

#[test]
fn summary_prints_sample_positions_verbatim() {
    let mut cursor = Cursor::new(Vec::new());
    summary(Path::new(DISTRICTS), &mut cursor).unwrap();

    let string = get_string(&mut cursor);
    // trailing zero survives, the literal is echoed as written
    assert!(string.contains("  District 1: [-122.41940, 37.7749]\n"));
    assert!(string.contains("  District 2: [-122.5, 37.8]\n"));
    assert!(string.contains("  District 3: [-121, 38]\n"));
}

#[test]
fn audit_tallies_coordinate_precision() {
    let mut cursor = Cursor::new(Vec::new());
    audit(Path::new(DISTRICTS), Path::new(METADATA), &mut cursor).unwrap();

    let string = get_string(&mut cursor);
    assert!(string.contains("  lat_0: 3 coordinates\n"));
    assert!(string.contains("  lat_1: 6 coordinates\n"));
    assert!(string.contains("  lat_2: 4 coordinates\n"));
    assert!(string.contains("  lat_4: 2 coordinates\n"));
    assert!(string.contains("  lon_0: 3 coordinates\n"));
    assert!(string.contains("  lon_1: 6 coordinates\n"));
    assert!(string.contains("  lon_2: 4 coordinates\n"));
    assert!(string.contains("  lon_5: 2 coordinates\n"));
}

#[test]
fn audit_cross_references_metadata() {
    let mut cursor = Cursor::new(Vec::new());
    audit(Path::new(DISTRICTS), Path::new(METADATA), &mut cursor).unwrap();

    let string = get_string(&mut cursor);
    assert!(string.contains("Metadata entries: 3\n"));
    assert!(string.contains("Keys in main file: 2\n"));
    assert!(string.contains("Keys in metadata: 3\n"));
    assert!(string.contains("Overlapping keys: 1\n"));
    assert!(string.contains("Sample overlapping keys: [CA-1]\n"));
}

#[test]
fn audit_estimates_savings_from_measured_totals() {
    let mut cursor = Cursor::new(Vec::new());
    audit(Path::new(DISTRICTS), Path::new(METADATA), &mut cursor).unwrap();

    let string = get_string(&mut cursor);
    assert!(string.contains("Current coordinates: 15\n"));
    assert!(string.contains("Estimated after optimization: 11\n"));
    assert!(string.contains("Potential coordinate reduction: 4 (30.0%)\n"));
}

#[test]
fn audit_without_metadata_prints_notice() {
    let mut cursor = Cursor::new(Vec::new());
    let missing = Path::new("./tests/data/no-such-metadata.json");
    audit(Path::new(DISTRICTS), missing, &mut cursor).unwrap();

    let string = get_string(&mut cursor);
    assert!(string.contains("Metadata file not found"));
    // the remaining sections still complete
    assert!(string.contains("5. POTENTIAL SAVINGS CALCULATION"));
    assert!(string.contains("Phase 3 - Advanced optimization:"));
}

#[test]
fn missing_input_fails_before_any_output() {
    let mut cursor = Cursor::new(Vec::new());
    let result = summary(Path::new("./tests/data/no-such-districts.json"), &mut cursor);
    assert!(result.is_err());
    assert!(get_string(&mut cursor).is_empty());
}

#[test]
fn malformed_input_fails_before_any_output() {
    let mut cursor = Cursor::new(Vec::new());
    let result = summary(Path::new("./tests/data/malformed.json"), &mut cursor);
    assert!(result.is_err());
    assert!(get_string(&mut cursor).is_empty());
}

#[test]
fn reports_are_deterministic() {
    let mut first = Cursor::new(Vec::new());
    let mut second = Cursor::new(Vec::new());
    audit(Path::new(DISTRICTS), Path::new(METADATA), &mut first).unwrap();
    audit(Path::new(DISTRICTS), Path::new(METADATA), &mut second).unwrap();
    assert_eq!(get_string(&mut first), get_string(&mut second));
}
