//! GDP trend/cycle decomposition and diagnostics.
//!
//! Usage: `gdp-cycle [CSV_PATH] [OUT_DIR]`

use anyhow::Result;
use econ_stats::gdp::{self, GdpConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_CSV: &str = "GDPC1.csv";
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

    let config = GdpConfig::new(csv_path, out_dir);
    gdp::run(&config)?;

    println!(
        "Analysis complete. Results in {}",
        config.out_dir.display()
    );
    Ok(())
}
