//! Bilateral FDI trend pipeline
//!
//! For each configured country pair and direction, sums the matching
//! indicator rows per year, cleans the series, derives growth rates, and
//! compares the pre/post halves with a rank-sum test. Each analyzed
//! pair/direction leaves a trend chart behind; all computed p-values land in
//! one aggregate `result.txt`.
//!
//! A pair/direction with no matching rows (or nothing left after cleaning) is
//! skipped entirely: no chart, no log line.

use std::path::PathBuf;

use econ_core::{split_at_midpoint, AnnualSeries, Result};
use econ_data::BilateralTable;
use econ_inference::mann_whitney_u;
use econ_report::{investment_trend_chart, safe_filename, ReportDir};
use tracing::{info, warn};

/// Year marked on every trend chart as the pre/post reference point
const MARKER_YEAR: i32 = 2019;

/// Flow direction of a bilateral investment position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Outward,
    Inward,
}

impl Direction {
    /// Substring matched (case-sensitively) against the indicator name
    pub fn indicator_filter(self) -> &'static str {
        match self {
            Direction::Outward => "Outward Direct Investment",
            Direction::Inward => "Inward Direct Investment",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Outward => "Outward",
            Direction::Inward => "Inward",
        }
    }

    /// Arrow used in report lines: outward flows point at the counterpart
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Outward => "->",
            Direction::Inward => "<-",
        }
    }
}

/// Configuration for one FDI analysis run
#[derive(Debug, Clone)]
pub struct FdiConfig {
    pub csv_path: PathBuf,
    pub out_dir: PathBuf,
    /// (country, counterpart) pairs, analyzed in order, both directions each
    pub pairs: Vec<(String, String)>,
    /// Year columns to load and analyze, in order
    pub years: Vec<i32>,
}

impl FdiConfig {
    /// Configuration with the default pair list and 2009–2022 year range
    pub fn new(csv_path: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
            out_dir: out_dir.into(),
            pairs: default_country_pairs(),
            years: (2009..=2022).collect(),
        }
    }
}

/// The default reporting economy and its counterparts
pub fn default_country_pairs() -> Vec<(String, String)> {
    const REPORTER: &str = "China, P.R.: Mainland";
    [
        "Vietnam",
        "Mexico",
        "United States",
        "India",
        "Japan",
        "Germany",
        "United Kingdom",
        "Russian Federation",
        "Indonesia",
    ]
    .iter()
    .map(|c| (REPORTER.to_string(), c.to_string()))
    .collect()
}

/// Counters describing one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FdiSummary {
    /// Pair/directions with data: one chart each
    pub analyzed: usize,
    /// Pair/directions skipped for lack of data
    pub skipped: usize,
    /// Rank-sum tests that produced a reported p-value
    pub tested: usize,
}

/// Run the FDI trend analysis end to end
pub fn run(config: &FdiConfig) -> Result<FdiSummary> {
    let table = BilateralTable::from_csv(&config.csv_path, &config.years)?;
    let report = ReportDir::create(&config.out_dir)?;
    let mut log = report.line_log("result.txt")?;
    let mut summary = FdiSummary::default();

    for (country, counterpart) in &config.pairs {
        for direction in [Direction::Outward, Direction::Inward] {
            let Some(sums) = table.sum_matching(country, counterpart, direction.indicator_filter())
            else {
                warn!(%country, %counterpart, direction = direction.label(), "no matching rows, skipping");
                summary.skipped += 1;
                continue;
            };

            let series = AnnualSeries::from_raw(sums.into_iter().map(|(y, v)| (y, Some(v))));
            if series.is_empty() {
                warn!(%country, %counterpart, direction = direction.label(), "no usable observations, skipping");
                summary.skipped += 1;
                continue;
            }

            let growth = series.growth_rates();
            let (pre, post) = split_at_midpoint(&growth);

            let p_value = if pre.len() > 1 && post.len() > 1 {
                match mann_whitney_u(&pre, &post) {
                    Ok(test) => Some(test.p_value),
                    Err(e) => {
                        warn!(%country, %counterpart, error = %e, "rank-sum test not computable");
                        None
                    }
                }
            } else {
                None
            };

            if let Some(p) = p_value {
                log.record(&format!(
                    "{} Investment {} {} {}: p-value = {:.5}",
                    direction.label(),
                    country,
                    direction.arrow(),
                    counterpart,
                    p
                ))?;
                summary.tested += 1;
            }

            let mut title = format!(
                "{} Investment Trend: {} {} {}",
                direction.label(),
                country,
                direction.arrow(),
                counterpart
            );
            if let Some(p) = p_value {
                title.push_str(&format!(" (p-value = {p:.5})"));
            }

            let chart_path = report.file(&format!(
                "{}_{}_{}.png",
                direction.label(),
                safe_filename(country),
                safe_filename(counterpart)
            ));
            investment_trend_chart(
                &chart_path,
                &title,
                series.years(),
                series.values(),
                Some(MARKER_YEAR),
            )?;

            info!(
                %country,
                %counterpart,
                direction = direction.label(),
                observations = series.len(),
                "analyzed pair"
            );
            summary.analyzed += 1;
        }
    }

    log.finish()?;
    Ok(summary)
}
