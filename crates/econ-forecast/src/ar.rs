//! Autoregressive model estimation and forecasting
//!
//! AR(p) with intercept, estimated by conditional least squares:
//!
//! y_t = c + φ₁·y_{t−1} + … + φ_p·y_{t−p} + ε_t
//!
//! Forecast standard errors come from the psi-weight expansion of the fitted
//! process, so interval width accounts for the autoregressive dynamics rather
//! than growing linearly with the horizon.

use econ_core::{Error, Result};
use nalgebra::{Cholesky, DMatrix, DVector};
use statrs::distribution::{ContinuousCDF, Normal};

/// A fitted autoregressive model
#[derive(Debug, Clone)]
pub struct ArModel {
    order: usize,
    intercept: f64,
    coefficients: Vec<f64>,
    /// Standard errors for [intercept, φ₁..φ_p]
    stderr: Vec<f64>,
    /// Maximum-likelihood residual variance
    sigma2: f64,
    log_likelihood: f64,
    aic: f64,
    bic: f64,
    /// Effective observations entering the regression
    n_obs: usize,
    /// Full training series, kept for forecasting
    data: Vec<f64>,
}

/// Point forecasts with symmetric confidence bounds
///
/// `lower[h] <= point[h] <= upper[h]` holds at every step.
#[derive(Debug, Clone, PartialEq)]
pub struct ArForecast {
    pub point: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    /// Confidence level of the bounds, e.g. 0.95
    pub level: f64,
}

impl ArModel {
    /// Fit an AR(p) model by conditional least squares
    ///
    /// A singular regression (constant series, too little variation) is an
    /// explicit fitting failure, never a silently degenerate model.
    pub fn fit(series: &[f64], order: usize) -> Result<Self> {
        if order == 0 {
            return Err(Error::InvalidParameter(
                "autoregressive order must be at least 1".to_string(),
            ));
        }
        let n = series.len();
        let k = order + 1;
        // Need strictly more rows than parameters for a residual variance.
        if n < 2 * order + 4 {
            return Err(Error::too_short(2 * order + 4, n));
        }
        if series.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("series"));
        }

        let rows = n - order;
        let x = DMatrix::from_fn(rows, k, |r, c| {
            let t = r + order;
            if c == 0 {
                1.0
            } else {
                series[t - c]
            }
        });
        let y = DVector::from_fn(rows, |r, _| series[r + order]);

        let xtx = x.transpose() * &x;
        let xty = x.transpose() * &y;
        let chol = Cholesky::new(xtx).ok_or_else(|| {
            Error::Computation("autoregressive fit failed: singular normal equations".to_string())
        })?;
        let beta = chol.solve(&xty);
        let cov_unscaled = chol.inverse();

        let residuals = &y - &x * &beta;
        let rss = residuals.norm_squared();
        let dof = rows - k;
        let sigma2_unbiased = rss / dof as f64;
        let sigma2 = rss / rows as f64;
        if !(sigma2.is_finite() && sigma2 >= 0.0) {
            return Err(Error::Computation(
                "autoregressive fit failed: non-finite residual variance".to_string(),
            ));
        }

        let stderr = (0..k)
            .map(|i| (sigma2_unbiased * cov_unscaled[(i, i)]).sqrt())
            .collect();

        let nf = rows as f64;
        // Gaussian conditional log-likelihood at the CLS optimum.
        let log_likelihood = if sigma2 > 0.0 {
            -0.5 * nf * ((2.0 * std::f64::consts::PI * sigma2).ln() + 1.0)
        } else {
            f64::INFINITY
        };
        // Parameter count includes the innovation variance.
        let n_params = (k + 1) as f64;
        let aic = -2.0 * log_likelihood + 2.0 * n_params;
        let bic = -2.0 * log_likelihood + n_params * nf.ln();

        Ok(Self {
            order,
            intercept: beta[0],
            coefficients: beta.iter().skip(1).copied().collect(),
            stderr,
            sigma2,
            log_likelihood,
            aic,
            bic,
            n_obs: rows,
            data: series.to_vec(),
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    pub fn aic(&self) -> f64 {
        self.aic
    }

    pub fn bic(&self) -> f64 {
        self.bic
    }

    /// Forecast `horizon` steps ahead with symmetric normal bounds
    ///
    /// `level` is the two-sided confidence level in (0, 1). A zero horizon
    /// yields empty vectors.
    pub fn forecast(&self, horizon: usize, level: f64) -> Result<ArForecast> {
        if !(0.0..1.0).contains(&level) || level <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "confidence level must be in (0, 1), got {level}"
            )));
        }
        let mut forecast = ArForecast {
            point: Vec::with_capacity(horizon),
            lower: Vec::with_capacity(horizon),
            upper: Vec::with_capacity(horizon),
            level,
        };
        if horizon == 0 {
            return Ok(forecast);
        }

        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| Error::Computation(format!("standard normal: {e}")))?;
        let z = normal.inverse_cdf((1.0 + level) / 2.0);

        // Psi weights of the AR recursion drive the forecast-error variance.
        let mut psi = vec![1.0f64];
        for j in 1..horizon {
            let mut w = 0.0;
            for (i, phi) in self.coefficients.iter().enumerate() {
                if j > i {
                    w += phi * psi[j - 1 - i];
                }
            }
            psi.push(w);
        }

        let mut history = self.data.clone();
        let mut cum_psi_sq = 0.0;
        for (h, psi_h) in psi.iter().enumerate() {
            let t = history.len();
            let mut pred = self.intercept;
            for (i, phi) in self.coefficients.iter().enumerate() {
                pred += phi * history[t - 1 - i];
            }
            history.push(pred);

            cum_psi_sq += psi_h * psi_h;
            let se = (self.sigma2 * cum_psi_sq).sqrt();
            forecast.point.push(pred);
            forecast.lower.push(pred - z * se);
            forecast.upper.push(pred + z * se);
            debug_assert!(forecast.lower[h] <= pred && pred <= forecast.upper[h]);
        }

        Ok(forecast)
    }

    /// Plain-text model summary for the report output
    pub fn summary(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        let _ = writeln!(out, "AR({}) Model Results", self.order);
        let _ = writeln!(out, "====================");
        let _ = writeln!(
            out,
            "observations: {} (effective {})",
            self.data.len(),
            self.n_obs
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "{:<10} {:>12} {:>12}", "term", "estimate", "std err");
        let _ = writeln!(
            out,
            "{:<10} {:>12.6} {:>12.6}",
            "const", self.intercept, self.stderr[0]
        );
        for (i, (phi, se)) in self
            .coefficients
            .iter()
            .zip(self.stderr.iter().skip(1))
            .enumerate()
        {
            let _ = writeln!(out, "{:<10} {:>12.6} {:>12.6}", format!("ar.L{}", i + 1), phi, se);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "sigma2: {:.6}", self.sigma2);
        let _ = writeln!(out, "log-likelihood: {:.4}", self.log_likelihood);
        let _ = writeln!(out, "AIC: {:.4}", self.aic);
        let _ = writeln!(out, "BIC: {:.4}", self.bic);
        out
    }
}
