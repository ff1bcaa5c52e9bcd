//! CSV ingestion for the econ-stats analyses
//!
//! Two loaders, one per analysis input:
//!
//! - [`BilateralTable`]: the direct-investment table keyed by
//!   (country, counterpart, indicator) with numeric year columns. Sentinel
//!   cells that do not parse become missing values.
//! - [`DatedSeries`]: a (date, value) macro series such as quarterly real GDP.
//!
//! Both treat an unreadable file as a fatal error; an empty row selection on
//! the bilateral table is a defined "no data" outcome instead.

pub mod gdp;
pub mod table;

pub use gdp::{fractional_year, DatedSeries};
pub use table::BilateralTable;
