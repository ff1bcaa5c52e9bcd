//! Mann–Whitney U rank-sum test
//!
//! Two-sided, two-sample test for a distributional shift, using the normal
//! approximation with midranks for ties, a tie-corrected variance, and a
//! continuity correction.

use econ_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// Result of a two-sided Mann–Whitney U test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankSumTest {
    /// U statistic of the first sample
    pub u_statistic: f64,
    /// Two-sided p-value in [0, 1]
    pub p_value: f64,
}

/// Run a two-sided Mann–Whitney U test on two samples
///
/// Each sample must hold at least two finite observations; the caller is
/// expected to gate on that before asking for a p-value. Samples where every
/// combined observation is identical have zero rank variance and are rejected
/// as a computation error.
pub fn mann_whitney_u(first: &[f64], second: &[f64]) -> Result<RankSumTest> {
    if first.len() < 2 {
        return Err(Error::too_short(2, first.len()));
    }
    if second.len() < 2 {
        return Err(Error::too_short(2, second.len()));
    }
    if first.iter().chain(second.iter()).any(|v| !v.is_finite()) {
        return Err(Error::non_finite("samples"));
    }

    let n1 = first.len();
    let n2 = second.len();
    let n = n1 + n2;

    // Midranks over the pooled sample; remember which sample each came from.
    let mut pooled: Vec<(f64, bool)> = first
        .iter()
        .map(|&v| (v, true))
        .chain(second.iter().map(|&v| (v, false)))
        .collect();
    pooled.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut rank_sum_first = 0.0;
    let mut tie_term = 0.0;
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && pooled[j].0 == pooled[i].0 {
            j += 1;
        }
        let ties = (j - i) as f64;
        // Average of ranks i+1..=j (1-based).
        let midrank = (i + j + 1) as f64 / 2.0;
        for item in &pooled[i..j] {
            if item.1 {
                rank_sum_first += midrank;
            }
        }
        tie_term += ties * ties * ties - ties;
        i = j;
    }

    let n1f = n1 as f64;
    let n2f = n2 as f64;
    let nf = n as f64;
    let u1 = rank_sum_first - n1f * (n1f + 1.0) / 2.0;

    let mean = n1f * n2f / 2.0;
    let variance =
        n1f * n2f / 12.0 * ((nf + 1.0) - tie_term / (nf * (nf - 1.0)));
    if variance <= 0.0 {
        return Err(Error::Computation(
            "pooled sample has zero rank variance (all observations tied)".to_string(),
        ));
    }

    // Continuity correction pulls the statistic half a rank toward the mean.
    let centered = u1 - mean;
    let z = (centered - 0.5 * centered.signum()) / variance.sqrt();

    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| Error::Computation(format!("standard normal: {e}")))?;
    let p_value = (2.0 * (1.0 - normal.cdf(z.abs()))).clamp(0.0, 1.0);

    Ok(RankSumTest {
        u_statistic: u1,
        p_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn separated_samples_reject() {
        let pre = [0.01, 0.02, 0.01, 0.02];
        let post = [0.5, 0.6, 0.55, 0.52];
        let test = mann_whitney_u(&pre, &post).unwrap();
        assert!(test.p_value < 0.05, "p = {}", test.p_value);
        assert_abs_diff_eq!(test.u_statistic, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn similar_samples_do_not_reject() {
        let a = [0.10, 0.12, 0.11, 0.13, 0.09, 0.12];
        let b = [0.11, 0.10, 0.13, 0.12, 0.10, 0.11];
        let test = mann_whitney_u(&a, &b).unwrap();
        assert!(test.p_value > 0.05, "p = {}", test.p_value);
    }

    #[test]
    fn symmetric_in_sample_order() {
        let a = [1.0, 3.0, 5.0, 7.0];
        let b = [2.0, 4.0, 6.0, 8.0];
        let t_ab = mann_whitney_u(&a, &b).unwrap();
        let t_ba = mann_whitney_u(&b, &a).unwrap();
        assert_abs_diff_eq!(t_ab.p_value, t_ba.p_value, epsilon = 1e-12);
        // U1 + U2 = n1 * n2
        assert_abs_diff_eq!(
            t_ab.u_statistic + t_ba.u_statistic,
            16.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn handles_ties_with_midranks() {
        let a = [1.0, 2.0, 2.0, 3.0];
        let b = [2.0, 3.0, 3.0, 4.0];
        let test = mann_whitney_u(&a, &b).unwrap();
        assert!(test.p_value > 0.0 && test.p_value <= 1.0);
    }

    #[test]
    fn rejects_small_samples() {
        assert!(mann_whitney_u(&[1.0], &[2.0, 3.0]).is_err());
        assert!(mann_whitney_u(&[1.0, 2.0], &[3.0]).is_err());
        assert!(mann_whitney_u(&[], &[]).is_err());
    }

    #[test]
    fn rejects_nan() {
        assert!(mann_whitney_u(&[1.0, f64::NAN], &[2.0, 3.0]).is_err());
    }

    #[test]
    fn all_tied_observations_are_degenerate() {
        assert!(mann_whitney_u(&[5.0, 5.0, 5.0], &[5.0, 5.0]).is_err());
    }

    proptest! {
        #[test]
        fn p_value_is_a_probability(
            a in prop::collection::vec(-100f64..100.0, 2..20),
            b in prop::collection::vec(-100f64..100.0, 2..20),
        ) {
            if let Ok(test) = mann_whitney_u(&a, &b) {
                prop_assert!((0.0..=1.0).contains(&test.p_value));
                prop_assert!(test.u_statistic >= 0.0);
                prop_assert!(test.u_statistic <= (a.len() * b.len()) as f64);
            }
        }
    }
}
