use super::geojson::{scalar, type_name, Feature};
use serde_json::Number;
use std::collections::{BTreeMap, HashSet};
use std::error::Error;

/// Number of leading positions per feature that feed the precision tally.
pub const PRECISION_SAMPLE: usize = 10;

pub struct KeyStats {
    pub total: usize,
    pub unique: usize,
    pub duplicates: Vec<String>,
}

/// Walk the features once and record every key that was already seen
/// earlier in the same pass. A key occurring three times therefore
/// contributes two duplicate entries.
pub fn key_stats(features: &[Feature]) -> Result<KeyStats, Box<dyn Error>> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for feature in features {
        let key = feature.district_key()?;
        if !seen.insert(key.clone()) {
            duplicates.push(key);
        }
    }
    Ok(KeyStats {
        total: features.len(),
        unique: seen.len(),
        duplicates,
    })
}

pub struct RingStats {
    pub total: u64,
    pub average: u64,
    pub max: u64,
    pub min: u64,
}

pub fn ring_stats(features: &[Feature]) -> Result<RingStats, Box<dyn Error>> {
    if features.is_empty() {
        return Err("feature collection is empty".into());
    }
    let mut total = 0;
    let mut max = 0;
    let mut min = u64::MAX;
    for feature in features {
        let count = feature.outer_ring()?.len() as u64;
        total += count;
        max = max.max(count);
        min = min.min(count);
    }
    let average = total / features.len() as u64;
    Ok(RingStats {
        total,
        average,
        max,
        min,
    })
}

pub struct PrecisionTally(pub BTreeMap<String, u64>);

/// Tally fractional-digit counts of the first [`PRECISION_SAMPLE`]
/// positions of every outer ring, keyed `lat_<n>` / `lon_<n>`.
pub fn precision_tally(features: &[Feature]) -> Result<PrecisionTally, Box<dyn Error>> {
    let mut tally = BTreeMap::new();
    for feature in features {
        for (lon, lat) in feature.outer_ring()?.iter().take(PRECISION_SAMPLE) {
            let lat_key = format!("lat_{}", fraction_digits(lat));
            let lon_key = format!("lon_{}", fraction_digits(lon));
            *tally.entry(lat_key).or_insert(0) += 1;
            *tally.entry(lon_key).or_insert(0) += 1;
        }
    }
    Ok(PrecisionTally(tally))
}

/// Count the characters after the first `.` in the number's source
/// literal, or 0 if it has none. Trailing zeros count; the rule is
/// lexical on purpose.
pub fn fraction_digits(number: &Number) -> usize {
    let repr = number.to_string();
    match repr.find('.') {
        Some(dot) => repr.len() - dot - 1,
        None => 0,
    }
}

pub struct PropertySample {
    pub entries: Vec<(String, &'static str, String)>,
}

/// Describe the first feature's properties: name, JSON type and value.
pub fn sample_properties(features: &[Feature]) -> Result<PropertySample, Box<dyn Error>> {
    let first = features.first().ok_or("feature collection is empty")?;
    let entries = first
        .properties
        .iter()
        .map(|(key, value)| (key.clone(), type_name(value), scalar(value)))
        .collect();
    Ok(PropertySample { entries })
}
