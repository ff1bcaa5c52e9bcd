//! Bilateral FDI trend analysis.
//!
//! Usage: `fdi-trends [CSV_PATH] [OUT_DIR]`

use anyhow::Result;
use econ_stats::fdi::{self, FdiConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_CSV: &str = "CDIS_10-20-2024_03-06-30-04_timeSeries.csv";
const DEFAULT_OUT: &str = "results";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let csv_path = args.next().unwrap_or_else(|| DEFAULT_CSV.to_string());
    let out_dir = args.next().unwrap_or_else(|| DEFAULT_OUT.to_string());

    let config = FdiConfig::new(csv_path, out_dir);
    let summary = fdi::run(&config)?;

    println!(
        "Analysis complete: {} series analyzed, {} skipped, {} p-values reported. Results in {}",
        summary.analyzed,
        summary.skipped,
        summary.tested,
        config.out_dir.display()
    );
    Ok(())
}
