//! Core types for batch econometric analyses
//!
//! This crate carries the pieces shared by every other econ-stats crate:
//!
//! - a unified [`Error`]/[`Result`] pair used across the workspace
//! - [`AnnualSeries`]: cleaned (year, value) sequences with missing and
//!   exact-zero entries removed
//! - period-over-period [`relative_growth`] and the fixed
//!   [`split_at_midpoint`] pre/post partition used by the rank-sum analysis
//! - [`Describe`]: describe()-style summary statistics
//!
//! # Example
//!
//! ```rust
//! use econ_core::{AnnualSeries, split_at_midpoint};
//!
//! let series = AnnualSeries::from_raw(vec![
//!     (2009, Some(120.0)),
//!     (2010, None),          // dropped
//!     (2011, Some(0.0)),     // dropped
//!     (2012, Some(150.0)),
//!     (2013, Some(180.0)),
//! ]);
//! assert_eq!(series.years(), &[2009, 2012, 2013]);
//!
//! let growth = series.growth_rates();
//! assert_eq!(growth.len(), 2);
//! let (pre, post) = split_at_midpoint(&growth);
//! assert_eq!(pre.len() + post.len(), 2);
//! ```

pub mod error;
pub mod series;

pub use error::{Error, Result};
pub use series::{relative_growth, split_at_midpoint, AnnualSeries, Describe};
