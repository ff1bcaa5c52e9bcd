//! Autoregressive forecasting for cyclical series
//!
//! [`ArModel`] fits an AR(p) with intercept by conditional least squares and
//! produces multi-step forecasts with normal confidence bounds derived from
//! the psi-weight expansion. Fitting failures (singular regressions) are
//! explicit errors.
//!
//! ```rust
//! use econ_forecast::ArModel;
//!
//! let series: Vec<f64> = (0..60).map(|i| (i as f64 * 0.4).sin()).collect();
//! let model = ArModel::fit(&series, 2).unwrap();
//! let forecast = model.forecast(8, 0.95).unwrap();
//! assert_eq!(forecast.point.len(), 8);
//! ```

pub mod ar;

pub use ar::{ArForecast, ArModel};
