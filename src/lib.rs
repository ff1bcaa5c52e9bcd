//! Batch econometric analyses
//!
//! Two non-interactive pipelines over local CSV inputs:
//!
//! - [`fdi`]: bilateral foreign-direct-investment trends with a rank-sum
//!   comparison of pre/post growth-rate distributions per country pair
//! - [`gdp`]: Hodrick–Prescott decomposition of a quarterly GDP series with
//!   autocorrelation, spectral, forecast, and unit-root diagnostics
//!
//! Each pipeline loads its input, computes, writes charts and text reports
//! into an output directory, and returns. The member crates carry the
//! individual estimators and are re-exported here.

pub mod fdi;
pub mod gdp;

pub use econ_core as core;
pub use econ_data as data;
pub use econ_filter as filter;
pub use econ_forecast as forecast;
pub use econ_inference as inference;
pub use econ_report as report;
