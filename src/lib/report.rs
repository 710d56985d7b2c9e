use super::geojson::Feature;
use super::metadata::CrossReference;
use super::stats::{KeyStats, PrecisionTally, PropertySample, RingStats};
use itertools::Itertools;
use std::error::Error;
use std::io::Write;

/// How many duplicate keys are echoed in the report.
const SAMPLE_DUPLICATES: usize = 10;
/// How many features contribute a verbatim sample position.
const SAMPLE_POSITIONS: usize = 3;
/// Expected coordinate reduction from precision + simplification.
const COORD_REDUCTION: f64 = 0.3;
/// Expected file size after optimization, as a fraction of the original.
const SIZE_RETAINED: f64 = 0.4;

pub trait Report {
    fn write_report(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
}

impl Report for KeyStats {
    fn write_report(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        writeln!(writer, "Total features: {}", self.total)?;
        writeln!(writer, "Unique districts: {}", self.unique)?;
        writeln!(writer, "Duplicates: {}", self.duplicates.len())?;
        if !self.duplicates.is_empty() {
            let sample = self.duplicates.iter().take(SAMPLE_DUPLICATES).join(", ");
            writeln!(writer, "Duplicate keys: [{}]", sample)?;
        }
        Ok(())
    }
}

impl Report for RingStats {
    fn write_report(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        writeln!(writer, "Coordinate Analysis:")?;
        writeln!(writer, "  Total coordinates: {}", group_digits(self.total))?;
        writeln!(writer, "  Average per district: {}", group_digits(self.average))?;
        writeln!(writer, "  Max per district: {}", group_digits(self.max))?;
        writeln!(writer, "  Min per district: {}", group_digits(self.min))?;
        Ok(())
    }
}

impl Report for PrecisionTally {
    fn write_report(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        writeln!(writer, "Coordinate Precision:")?;
        for (precision, count) in &self.0 {
            writeln!(
                writer,
                "  {}: {} coordinates",
                precision,
                group_digits(*count)
            )?;
        }
        Ok(())
    }
}

impl Report for PropertySample {
    fn write_report(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        writeln!(writer, "Properties in each feature:")?;
        for (key, type_name, value) in &self.entries {
            writeln!(writer, "  {}: {} = {}", key, type_name, value)?;
        }
        Ok(())
    }
}

impl Report for CrossReference {
    fn write_report(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        writeln!(
            writer,
            "Metadata file size: {} bytes ({:.1} KB)",
            group_digits(self.file_size),
            kilobytes(self.file_size)
        )?;
        writeln!(writer, "Metadata entries: {}", self.entries)?;
        writeln!(writer, "Keys in main file: {}", self.main_keys)?;
        writeln!(writer, "Keys in metadata: {}", self.metadata_keys)?;
        writeln!(writer, "Overlapping keys: {}", self.overlap)?;
        if !self.sample_overlap.is_empty() {
            let sample = self.sample_overlap.iter().join(", ");
            writeln!(writer, "Sample overlapping keys: [{}]", sample)?;
        }
        Ok(())
    }
}

pub struct FileFacts {
    pub bytes: u64,
}

impl Report for FileFacts {
    fn write_report(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        writeln!(
            writer,
            "File size: {} bytes ({:.1} MB)",
            group_digits(self.bytes),
            megabytes(self.bytes)
        )?;
        Ok(())
    }
}

/// Rough savings estimates derived from the measured totals with fixed
/// multipliers; advisory output, not a computation over the geometry.
pub struct Savings {
    coordinates: u64,
    file_bytes: u64,
}

impl Savings {
    pub fn new(rings: &RingStats, file_bytes: u64) -> Self {
        Savings {
            coordinates: rings.total,
            file_bytes,
        }
    }

    pub fn reduced_coordinates(&self) -> u64 {
        (self.coordinates as f64 * COORD_REDUCTION) as u64
    }

    pub fn estimated_bytes(&self) -> f64 {
        self.file_bytes as f64 * SIZE_RETAINED
    }
}

impl Report for Savings {
    fn write_report(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        let reduction = self.reduced_coordinates();
        writeln!(
            writer,
            "Current coordinates: {}",
            group_digits(self.coordinates)
        )?;
        writeln!(
            writer,
            "Estimated after optimization: {}",
            group_digits(self.coordinates - reduction)
        )?;
        writeln!(
            writer,
            "Potential coordinate reduction: {} ({:.1}%)",
            group_digits(reduction),
            COORD_REDUCTION * 100.0
        )?;
        let current_mb = megabytes(self.file_bytes);
        let estimated_mb = self.estimated_bytes() / 1024.0 / 1024.0;
        writeln!(writer, "Current file size: {:.1} MB", current_mb)?;
        writeln!(writer, "Estimated after optimization: {:.1} MB", estimated_mb)?;
        writeln!(
            writer,
            "Potential size reduction: {:.1} MB",
            current_mb - estimated_mb
        )?;
        Ok(())
    }
}

/// Print the first position of each of the first few features verbatim,
/// straight from the source literals.
pub fn write_sample_positions(
    features: &[Feature],
    writer: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    writeln!(writer, "Sample coordinate precision:")?;
    for (index, feature) in features.iter().take(SAMPLE_POSITIONS).enumerate() {
        let ring = feature.outer_ring()?;
        let (lon, lat) = ring.first().ok_or("outer ring is empty")?;
        writeln!(writer, "  District {}: [{}, {}]", index + 1, lon, lat)?;
    }
    Ok(())
}

pub fn write_title(writer: &mut dyn Write, title: &str) -> Result<(), Box<dyn Error>> {
    writeln!(writer, "{}", title)?;
    writeln!(writer, "{}", "=".repeat(60))?;
    Ok(())
}

pub fn write_section(writer: &mut dyn Write, title: &str) -> Result<(), Box<dyn Error>> {
    writeln!(writer)?;
    writeln!(writer, "{}", title)?;
    writeln!(writer, "{}", "-".repeat(40))?;
    Ok(())
}

fn write_lines(writer: &mut dyn Write, lines: &[&str]) -> Result<(), Box<dyn Error>> {
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Short opportunity list of the summary report.
pub fn write_opportunities(writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    write_lines(
        writer,
        &[
            "Optimization opportunities:",
            "  1. Coordinate precision: Many coordinates have 6+ decimal places",
            "  2. Duplicate coordinates: Check for redundant points",
            "  3. Unnecessary properties: Some properties might not be needed",
        ],
    )
}

pub fn write_critical_issues(writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    write_lines(
        writer,
        &[
            "CRITICAL ISSUES:",
            "  1. File size: 369MB is extremely large for web loading",
            "  2. Coordinate precision: Many coordinates have 6+ decimal places",
            "  3. Duplicate data: Metadata exists in both main file and separate file",
            "  4. Loading approach: Currently loads entire file before displaying",
            "",
            "OPTIMIZATION STRATEGIES:",
            "  1. Reduce coordinate precision (6 decimals -> 4-5 decimals)",
            "  2. Implement coordinate simplification (Douglas-Peucker algorithm)",
            "  3. Merge metadata into main file to reduce HTTP requests",
            "  4. Implement progressive loading (basic shapes first, details later)",
            "  5. Use vector tiles for better performance",
            "  6. Implement client-side caching",
        ],
    )
}

pub fn write_loading_approach(writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    write_lines(
        writer,
        &[
            "Current approach:",
            "  1. Load Mapbox GL JS",
            "  2. Fetch district-metadata.json (235KB)",
            "  3. Fetch congressional-districts.json (369MB)",
            "  4. Wait for entire file to load before displaying",
            "  5. Add all districts to map at once",
            "",
            "Problems with current approach:",
            "  - 369MB download blocks initial display",
            "  - No progressive loading",
            "  - No caching strategy",
            "  - Duplicate data between files",
            "  - No fallback for slow connections",
        ],
    )
}

pub fn write_phased_plan(writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    write_lines(
        writer,
        &[
            "Phase 1 - Immediate fixes:",
            "  1. Reduce coordinate precision to 4-5 decimals",
            "  2. Merge metadata into main file",
            "  3. Implement coordinate simplification",
            "  4. Add gzip compression",
            "",
            "Phase 2 - Progressive loading:",
            "  1. Load simplified boundaries first (10-20% of current size)",
            "  2. Display map immediately with basic shapes",
            "  3. Load detailed boundaries progressively",
            "  4. Implement client-side caching",
            "",
            "Phase 3 - Advanced optimization:",
            "  1. Implement vector tiles",
            "  2. Add server-side caching",
            "  3. Implement lazy loading by viewport",
            "  4. Add WebP/compressed formats",
        ],
    )
}

/// Group a count's digits in thousands for the report.
///
/// # Example
///
/// ```
/// use district_stats::report::group_digits;
///
/// assert_eq!(group_digits(1234567), "1,234,567");
/// assert_eq!(group_digits(42), "42");
/// ```
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

fn kilobytes(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}
