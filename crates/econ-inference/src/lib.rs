//! Hypothesis tests for the econ-stats analyses
//!
//! - [`mann_whitney_u`]: two-sided Mann–Whitney U rank-sum test with midranks,
//!   tie-corrected variance and continuity correction
//! - [`adf_test`]: augmented Dickey–Fuller unit-root test (constant-only
//!   specification, AIC lag selection)

pub mod adf;
pub mod ranksum;

pub use adf::{adf_test, AdfTest, CriticalValues, CONSTANT_CRITICAL_VALUES};
pub use ranksum::{mann_whitney_u, RankSumTest};
