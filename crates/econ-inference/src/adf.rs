//! Augmented Dickey–Fuller unit-root test
//!
//! Constant-only specification:
//!
//! Δy_t = α + β·y_{t−1} + Σ γ_i·Δy_{t−i} + ε_t
//!
//! The null hypothesis is β = 0 (unit root). The lag order is chosen by AIC
//! over 0..=⌊(n−1)^⅓⌋ and the t-statistic on β is compared against the
//! asymptotic Dickey–Fuller distribution.

use econ_core::{Error, Result};
use nalgebra::{Cholesky, DMatrix, DVector};

/// Critical values at the conventional significance levels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalValues {
    pub pct_1: f64,
    pub pct_5: f64,
    pub pct_10: f64,
}

/// Asymptotic critical values for the constant-only specification
pub const CONSTANT_CRITICAL_VALUES: CriticalValues = CriticalValues {
    pct_1: -3.43,
    pct_5: -2.86,
    pct_10: -2.57,
};

/// Result of an augmented Dickey–Fuller test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdfTest {
    /// t-statistic on the lagged level coefficient
    pub statistic: f64,
    /// Approximate p-value under the Dickey–Fuller distribution
    pub p_value: f64,
    /// Augmentation lags used in the regression
    pub lags: usize,
    /// Effective number of observations in the regression
    pub n_obs: usize,
    /// Critical values at 1%, 5% and 10%
    pub critical_values: CriticalValues,
}

impl AdfTest {
    /// Whether the unit-root null is rejected at the 5% level
    pub fn rejects_unit_root(&self) -> bool {
        self.statistic < self.critical_values.pct_5
    }
}

/// Run the augmented Dickey–Fuller test with AIC lag selection
///
/// `max_lags` caps the augmentation order; when `None` the conventional
/// ⌊(n−1)^⅓⌋ bound applies. Candidate orders are fitted on the common sample
/// available at the largest lag so their AIC values are comparable; the
/// selected order is then refitted on its full sample for the reported
/// statistic. A degenerate regression (constant series, collinear columns)
/// surfaces as a computation error.
pub fn adf_test(series: &[f64], max_lags: Option<usize>) -> Result<AdfTest> {
    let n = series.len();
    if n < 10 {
        return Err(Error::too_short(10, n));
    }
    if series.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite("series"));
    }

    let diff: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();
    let default_max = ((n - 1) as f64).powf(1.0 / 3.0).floor() as usize;
    let max_lags = max_lags.unwrap_or(default_max).min(n / 2 - 2);

    // AIC comparison is only meaningful over a shared sample, so every
    // candidate is fitted on the rows available at the largest lag.
    let mut best: Option<(usize, f64)> = None;
    for lag in 0..=max_lags {
        let Some(reg) = fit_adf_regression(series, &diff, lag, max_lags) else {
            continue;
        };
        let t_obs = reg.n_obs as f64;
        let k = (lag + 2) as f64;
        let aic = t_obs * (reg.rss / t_obs).ln() + 2.0 * k;
        let improves = best.as_ref().map_or(true, |(_, best_aic)| aic < *best_aic);
        if improves {
            best = Some((lag, aic));
        }
    }

    let (lags, _) = best.ok_or_else(|| {
        Error::Computation("unit-root regression is degenerate at every lag order".to_string())
    })?;

    // Refit the selected order on its full sample for the reported statistic.
    let reg = fit_adf_regression(series, &diff, lags, lags).ok_or_else(|| {
        Error::Computation("unit-root regression is degenerate at the selected lag".to_string())
    })?;

    if reg.se_level <= 0.0 || !reg.se_level.is_finite() {
        return Err(Error::Computation(
            "zero standard error on lagged level coefficient".to_string(),
        ));
    }
    let statistic = reg.beta_level / reg.se_level;

    Ok(AdfTest {
        statistic,
        p_value: dickey_fuller_p_value(statistic),
        lags,
        n_obs: reg.n_obs,
        critical_values: CONSTANT_CRITICAL_VALUES,
    })
}

struct Regression {
    beta_level: f64,
    se_level: f64,
    rss: f64,
    n_obs: usize,
}

/// Fit Δy_t on [1, y_{t−1}, Δy_{t−1..t−lag}] by ordinary least squares
///
/// Regression rows start at `start` (at least `lag`), so candidate orders can
/// share one sample during selection. Returns `None` when there are too few
/// rows or the normal equations are singular, so lag selection can skip the
/// order.
fn fit_adf_regression(
    series: &[f64],
    diff: &[f64],
    lag: usize,
    start: usize,
) -> Option<Regression> {
    let m = diff.len();
    let k = lag + 2;
    if start < lag || m <= start || m - start <= k {
        return None;
    }
    let rows = m - start;

    let x = DMatrix::from_fn(rows, k, |r, c| {
        let t = r + start;
        match c {
            0 => 1.0,
            1 => series[t],
            _ => diff[t - (c - 1)],
        }
    });
    let y = DVector::from_fn(rows, |r, _| diff[r + start]);

    let xtx = x.transpose() * &x;
    let xty = x.transpose() * &y;
    let chol = Cholesky::new(xtx)?;
    let beta = chol.solve(&xty);
    let cov_unscaled = chol.inverse();

    let residuals = &y - &x * &beta;
    let rss = residuals.norm_squared();
    let dof = rows - k;
    if dof == 0 {
        return None;
    }
    let sigma2 = rss / dof as f64;
    let se_level = (sigma2 * cov_unscaled[(1, 1)]).sqrt();

    Some(Regression {
        beta_level: beta[1],
        se_level,
        rss,
        n_obs: rows,
    })
}

/// Approximate p-value under the Dickey–Fuller tau distribution (constant case)
///
/// Piecewise-linear interpolation over asymptotic quantiles, clamped at the
/// table ends. Monotone decreasing in the statistic.
fn dickey_fuller_p_value(t_stat: f64) -> f64 {
    const TABLE: [(f64, f64); 9] = [
        (-3.96, 0.001),
        (-3.43, 0.01),
        (-3.12, 0.025),
        (-2.86, 0.05),
        (-2.57, 0.10),
        (-2.17, 0.25),
        (-1.57, 0.50),
        (-0.44, 0.90),
        (0.60, 0.99),
    ];

    if t_stat <= TABLE[0].0 {
        return TABLE[0].1;
    }
    if t_stat >= TABLE[TABLE.len() - 1].0 {
        return TABLE[TABLE.len() - 1].1;
    }
    for pair in TABLE.windows(2) {
        let (t0, p0) = pair[0];
        let (t1, p1) = pair[1];
        if t_stat <= t1 {
            let frac = (t_stat - t0) / (t1 - t0);
            return p0 + frac * (p1 - p0);
        }
    }
    unreachable!("statistic falls inside the table bounds")
}
