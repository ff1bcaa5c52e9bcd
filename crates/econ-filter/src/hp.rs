//! Hodrick–Prescott trend/cycle decomposition
//!
//! The filter picks the trend τ minimizing
//!
//! Σ (y_t − τ_t)² + λ Σ (Δ²τ_t)²
//!
//! which reduces to the linear system (I + λ DᵀD) τ = y with D the
//! second-difference operator. The system is symmetric positive definite, so
//! it is solved with a Cholesky factorization.

use econ_core::{Error, Result};
use nalgebra::{DMatrix, DVector};

/// Conventional smoothing parameter for quarterly observations
pub const QUARTERLY_LAMBDA: f64 = 1600.0;

/// Aligned trend and cycle components of a decomposed series
///
/// Both components have the same length and index as the input, and their sum
/// reconstructs the input at every point up to solver tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    pub trend: Vec<f64>,
    pub cycle: Vec<f64>,
}

/// Apply the Hodrick–Prescott filter to a series
///
/// Errors when the series is shorter than three observations, contains
/// non-finite values, or λ is not a positive finite number.
pub fn hp_filter(series: &[f64], lambda: f64) -> Result<Decomposition> {
    if !lambda.is_finite() || lambda <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "smoothing parameter must be positive and finite, got {lambda}"
        )));
    }
    let n = series.len();
    if n < 3 {
        return Err(Error::too_short(3, n));
    }
    if series.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite("series"));
    }

    // A = I + λ DᵀD; each second-difference row contributes a 3x3 stencil.
    let mut a = DMatrix::<f64>::identity(n, n);
    for r in 0..n - 2 {
        const STENCIL: [f64; 3] = [1.0, -2.0, 1.0];
        for (i, ci) in STENCIL.iter().enumerate() {
            for (j, cj) in STENCIL.iter().enumerate() {
                a[(r + i, r + j)] += lambda * ci * cj;
            }
        }
    }

    let y = DVector::from_column_slice(series);
    let chol = a
        .cholesky()
        .ok_or_else(|| Error::Computation("trend system is not positive definite".to_string()))?;
    let trend = chol.solve(&y);

    let cycle = series
        .iter()
        .zip(trend.iter())
        .map(|(y_t, tau_t)| y_t - tau_t)
        .collect();

    Ok(Decomposition {
        trend: trend.iter().copied().collect(),
        cycle,
    })
}
