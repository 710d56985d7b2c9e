use super::geojson::Feature;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::error::Error;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// How many overlapping keys are echoed in the report.
const SAMPLE_OVERLAP: usize = 5;

pub struct CrossReference {
    pub file_size: u64,
    pub entries: usize,
    pub main_keys: usize,
    pub metadata_keys: usize,
    pub overlap: usize,
    pub sample_overlap: Vec<String>,
}

/// Load the companion metadata mapping and intersect its keys with the
/// district keys of the main collection. Callers are expected to check
/// for the file's existence first; a missing file is an error here.
pub fn cross_reference(
    features: &[Feature],
    path: &Path,
) -> Result<CrossReference, Box<dyn Error>> {
    let file = File::open(path)?;
    let metadata: Map<String, Value> = serde_json::from_reader(BufReader::new(file))?;
    let file_size = fs::metadata(path)?.len();

    let main_keys = district_keys(features)?;
    let metadata_keys: BTreeSet<&str> = metadata.keys().map(String::as_str).collect();
    let overlap: Vec<&str> = main_keys
        .iter()
        .map(String::as_str)
        .filter(|key| metadata_keys.contains(key))
        .collect();

    Ok(CrossReference {
        file_size,
        entries: metadata.len(),
        main_keys: main_keys.len(),
        metadata_keys: metadata_keys.len(),
        overlap: overlap.len(),
        sample_overlap: overlap
            .iter()
            .take(SAMPLE_OVERLAP)
            .map(|key| key.to_string())
            .collect(),
    })
}

/// The set of district keys present in the main collection, sorted so
/// the sample echoed in the report is stable across runs.
pub fn district_keys(features: &[Feature]) -> Result<BTreeSet<String>, Box<dyn Error>> {
    features.iter().map(|feature| feature.district_key()).collect()
}
