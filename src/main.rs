use district_stats::{audit, summary, DISTRICTS_PATH, METADATA_PATH};
use std::error::Error;
use std::io::stdout;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "district_stats",
    about = "Diagnostics for congressional district GeoJSON bundles"
)]
enum Command {
    /// Print the basic district report
    Summary {
        /// Path to the district feature collection
        #[structopt(long, parse(from_os_str))]
        districts: Option<PathBuf>,
    },
    /// Print the comprehensive report with metadata cross-reference
    Audit {
        /// Path to the district feature collection
        #[structopt(long, parse(from_os_str))]
        districts: Option<PathBuf>,
        /// Path to the companion metadata mapping
        #[structopt(long, parse(from_os_str))]
        metadata: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let command = Command::from_args();
    let stdout = stdout();
    let mut writer = stdout.lock();
    match command {
        Command::Summary { districts } => {
            let districts = districts.unwrap_or_else(|| PathBuf::from(DISTRICTS_PATH));
            summary(&districts, &mut writer)
        }
        Command::Audit {
            districts,
            metadata,
        } => {
            let districts = districts.unwrap_or_else(|| PathBuf::from(DISTRICTS_PATH));
            let metadata = metadata.unwrap_or_else(|| PathBuf::from(METADATA_PATH));
            audit(&districts, &metadata, &mut writer)
        }
    }
}
