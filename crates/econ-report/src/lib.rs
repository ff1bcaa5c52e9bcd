//! Report emission for the econ-stats analyses
//!
//! Everything the pipelines leave behind goes through this crate: the output
//! directory itself ([`ReportDir`]), plain-text summaries, the aggregate
//! p-value log ([`LineLog`]), filesystem-safe names derived from country
//! labels ([`safe_filename`]), and the PNG charts.

pub mod filenames;
pub mod plots;
pub mod text;

pub use filenames::safe_filename;
pub use plots::{
    autocorrelation_chart, decomposition_chart, forecast_chart, histogram_chart,
    investment_trend_chart, series_chart,
};
pub use text::{LineLog, ReportDir};
