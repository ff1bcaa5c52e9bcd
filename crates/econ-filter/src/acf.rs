//! Sample autocorrelation function

use econ_core::{Error, Result};

/// Sample autocorrelation at every lag `0..n`
///
/// Uses the biased covariance estimator c_k = Σ (x_t − x̄)(x_{t−k} − x̄) / n
/// normalized by c_0, the convention used by the usual autocorrelation plot.
/// Lag zero is always exactly 1. A constant series has no autocorrelation
/// structure and is rejected.
pub fn acf(series: &[f64]) -> Result<Vec<f64>> {
    let n = series.len();
    if n < 2 {
        return Err(Error::too_short(2, n));
    }
    if series.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite("series"));
    }

    let mean = series.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = series.iter().map(|v| v - mean).collect();
    let c0 = centered.iter().map(|v| v * v).sum::<f64>() / n as f64;
    if c0 == 0.0 {
        return Err(Error::Computation(
            "series is constant, autocorrelation undefined".to_string(),
        ));
    }

    let mut out = Vec::with_capacity(n);
    for k in 0..n {
        let ck = centered[k..]
            .iter()
            .zip(centered.iter())
            .map(|(a, b)| a * b)
            .sum::<f64>()
            / n as f64;
        out.push(ck / c0);
    }
    Ok(out)
}
