//! Trend/cycle decomposition and frequency-domain estimators
//!
//! - [`hp_filter`]: Hodrick–Prescott filter producing aligned trend and cycle
//!   components (λ = [`QUARTERLY_LAMBDA`] for quarterly data)
//! - [`acf`]: sample autocorrelation function across all lags
//! - [`periodogram`]: one-sided FFT periodogram at a fixed sampling rate
//!
//! ```rust
//! use econ_filter::{hp_filter, QUARTERLY_LAMBDA};
//!
//! let gdp: Vec<f64> = (0..40).map(|i| 100.0 + 0.5 * i as f64).collect();
//! let d = hp_filter(&gdp, QUARTERLY_LAMBDA).unwrap();
//! assert_eq!(d.trend.len(), gdp.len());
//! ```

pub mod acf;
pub mod hp;
pub mod spectrum;

pub use acf::acf;
pub use hp::{hp_filter, Decomposition, QUARTERLY_LAMBDA};
pub use spectrum::{periodogram, Periodogram};
