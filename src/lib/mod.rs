use self::geojson::FeatureCollection;
use self::report::{FileFacts, Report, Savings};
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::Path;

pub mod geojson;
pub mod metadata;
pub mod report;
pub mod stats;

/// Default location of the district feature collection.
pub const DISTRICTS_PATH: &str = "public/districts/congressional-districts.json";
/// Default location of the companion metadata mapping.
pub const METADATA_PATH: &str = "public/districts/district-metadata.json";

/// Parse a GeoJSON feature collection. The whole structure is held in
/// memory for the duration of the run.
pub fn load_collection(file: impl Read) -> Result<FeatureCollection, Box<dyn Error>> {
    let collection = serde_json::from_reader(BufReader::new(file))?;
    Ok(collection)
}

/// The basic report: feature and duplicate counts, coordinate ring
/// statistics, the first feature's properties, file size, and a few
/// verbatim sample positions.
pub fn summary(path: &Path, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    let file = File::open(path)?;
    let collection = load_collection(file)?;
    let features = &collection.features;

    writeln!(writer, "Analyzing congressional districts JSON file...")?;
    stats::key_stats(features)?.write_report(writer)?;

    writeln!(writer)?;
    stats::ring_stats(features)?.write_report(writer)?;

    writeln!(writer)?;
    stats::sample_properties(features)?.write_report(writer)?;

    writeln!(writer)?;
    let bytes = fs::metadata(path)?.len();
    FileFacts { bytes }.write_report(writer)?;

    writeln!(writer)?;
    report::write_opportunities(writer)?;

    writeln!(writer)?;
    report::write_sample_positions(features, writer)?;

    Ok(())
}

/// The comprehensive report: everything in [`summary`] plus the
/// coordinate precision tally, the metadata cross-reference, and the
/// printed optimization advice with its rough savings estimates.
pub fn audit(
    path: &Path,
    metadata_path: &Path,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    let file = File::open(path)?;
    let collection = load_collection(file)?;
    let features = &collection.features;

    report::write_title(writer, "COMPREHENSIVE CONGRESSIONAL DISTRICTS ANALYSIS")?;

    report::write_section(writer, "1. MAIN GEOJSON FILE ANALYSIS")?;
    stats::key_stats(features)?.write_report(writer)?;
    writeln!(writer)?;
    let rings = stats::ring_stats(features)?;
    rings.write_report(writer)?;
    writeln!(writer)?;
    stats::precision_tally(features)?.write_report(writer)?;
    writeln!(writer)?;
    let bytes = fs::metadata(path)?.len();
    FileFacts { bytes }.write_report(writer)?;

    report::write_section(writer, "2. METADATA FILE ANALYSIS")?;
    // The one soft failure: a missing metadata file is a notice, not an
    // error, and the remaining sections still run.
    if metadata_path.exists() {
        metadata::cross_reference(features, metadata_path)?.write_report(writer)?;
    } else {
        writeln!(writer, "Metadata file not found: {}", metadata_path.display())?;
    }

    report::write_section(writer, "3. OPTIMIZATION OPPORTUNITIES")?;
    report::write_critical_issues(writer)?;

    report::write_section(writer, "4. CURRENT LOADING APPROACH")?;
    report::write_loading_approach(writer)?;

    report::write_section(writer, "5. POTENTIAL SAVINGS CALCULATION")?;
    Savings::new(&rings, bytes).write_report(writer)?;

    report::write_section(writer, "6. RECOMMENDED OPTIMIZED APPROACH")?;
    report::write_phased_plan(writer)?;

    Ok(())
}
