//! Annual series cleaning, growth rates and midpoint splitting
//!
//! An [`AnnualSeries`] is the cleaned form of a (year, value) sequence: entries
//! with missing or exactly-zero values are dropped while the original year
//! ordering is preserved. Growth rates and the pre/post midpoint split operate
//! on these cleaned sequences.

use crate::{Error, Result};

/// A cleaned (year, value) sequence
///
/// Invariant: `years.len() == values.len()`, every value is finite and
/// non-zero, and years appear in the same relative order as in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualSeries {
    years: Vec<i32>,
    values: Vec<f64>,
}

impl AnnualSeries {
    /// Build a cleaned series from raw per-year observations
    ///
    /// Drops every entry whose value is `None`, non-finite, or exactly zero.
    /// The relative order of retained years follows the input order.
    pub fn from_raw<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = (i32, Option<f64>)>,
    {
        let mut years = Vec::new();
        let mut values = Vec::new();
        for (year, value) in observations {
            if let Some(v) = value {
                if v.is_finite() && v != 0.0 {
                    years.push(year);
                    values.push(v);
                }
            }
        }
        Self { years, values }
    }

    /// Retained years, in source order
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Retained values, aligned with [`years`](Self::years)
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of retained observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the cleaned series retained nothing
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Period-over-period relative growth of the retained values
    ///
    /// See [`relative_growth`].
    pub fn growth_rates(&self) -> Vec<Option<f64>> {
        relative_growth(&self.values)
    }
}

/// Period-over-period relative growth
///
/// Returns a sequence of length `n - 1` (empty for `n <= 1`) where element `i`
/// is `(v[i+1] - v[i]) / v[i]`, or `None` when `v[i]` is zero. Division by
/// zero is a defined missing value here, never a panic or an infinity.
pub fn relative_growth(values: &[f64]) -> Vec<Option<f64>> {
    values
        .windows(2)
        .map(|w| {
            if w[0] == 0.0 {
                None
            } else {
                Some((w[1] - w[0]) / w[0])
            }
        })
        .collect()
}

/// Split a growth-rate sequence at its integer midpoint
///
/// The split point is `len / 2` (floor division) regardless of any calendar
/// alignment. Missing entries are excluded from each half, so the returned
/// halves contain only finite observations ready for a two-sample test.
pub fn split_at_midpoint(growth: &[Option<f64>]) -> (Vec<f64>, Vec<f64>) {
    let midpoint = growth.len() / 2;
    let keep = |slice: &[Option<f64>]| -> Vec<f64> {
        slice
            .iter()
            .filter_map(|g| *g)
            .filter(|g| g.is_finite())
            .collect()
    };
    (keep(&growth[..midpoint]), keep(&growth[midpoint..]))
}

/// Descriptive statistics of a sample
///
/// Mirrors the usual describe() block: count, mean, sample standard deviation
/// and the five-number summary with linearly interpolated quartiles.
#[derive(Debug, Clone, PartialEq)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl Describe {
    /// Compute descriptive statistics for a sample
    ///
    /// Errors on an empty sample or when the sample contains non-finite
    /// values.
    pub fn from_sample(sample: &[f64]) -> Result<Self> {
        if sample.is_empty() {
            return Err(Error::too_short(1, 0));
        }
        if sample.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("sample"));
        }

        let n = sample.len() as f64;
        let mean = sample.iter().sum::<f64>() / n;
        let std = if sample.len() > 1 {
            let ss = sample.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
            (ss / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        let mut sorted = sample.to_vec();
        sorted.sort_by(f64::total_cmp);

        Ok(Self {
            count: sample.len(),
            mean,
            std,
            min: sorted[0],
            q1: interpolated_quantile(&sorted, 0.25),
            median: interpolated_quantile(&sorted, 0.5),
            q3: interpolated_quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

impl std::fmt::Display for Describe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "count  {}", self.count)?;
        writeln!(f, "mean   {:.6}", self.mean)?;
        writeln!(f, "std    {:.6}", self.std)?;
        writeln!(f, "min    {:.6}", self.min)?;
        writeln!(f, "25%    {:.6}", self.q1)?;
        writeln!(f, "50%    {:.6}", self.median)?;
        writeln!(f, "75%    {:.6}", self.q3)?;
        write!(f, "max    {:.6}", self.max)
    }
}

/// Linear-interpolation quantile on an already sorted, non-empty slice
fn interpolated_quantile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = p * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn clean_drops_missing_and_zero() {
        let series = AnnualSeries::from_raw(vec![
            (2009, Some(1.0)),
            (2010, None),
            (2011, Some(0.0)),
            (2012, Some(2.5)),
            (2013, Some(f64::NAN)),
            (2014, Some(-3.0)),
        ]);

        assert_eq!(series.years(), &[2009, 2012, 2014]);
        assert_eq!(series.values(), &[1.0, 2.5, -3.0]);
    }

    #[test]
    fn clean_preserves_source_order() {
        // Years deliberately out of calendar order; relative order must hold.
        let series = AnnualSeries::from_raw(vec![
            (2015, Some(4.0)),
            (2009, Some(1.0)),
            (2012, Some(2.0)),
        ]);
        assert_eq!(series.years(), &[2015, 2009, 2012]);
    }

    #[test]
    fn empty_clean_is_defined() {
        let series = AnnualSeries::from_raw(vec![(2009, None), (2010, Some(0.0))]);
        assert!(series.is_empty());
        assert!(series.growth_rates().is_empty());
    }

    #[test]
    fn growth_length_is_n_minus_one() {
        let values = vec![100.0, 110.0, 99.0, 99.0];
        let growth = relative_growth(&values);
        assert_eq!(growth.len(), values.len() - 1);
        assert_abs_diff_eq!(growth[0].unwrap(), 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(growth[1].unwrap(), -0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(growth[2].unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn growth_after_zero_is_missing() {
        let growth = relative_growth(&[0.0, 5.0, 10.0]);
        assert_eq!(growth[0], None);
        assert_eq!(growth[1], Some(1.0));
    }

    #[test]
    fn growth_of_short_series_is_empty() {
        assert!(relative_growth(&[]).is_empty());
        assert!(relative_growth(&[42.0]).is_empty());
    }

    #[test]
    fn midpoint_split_floor_division() {
        let growth: Vec<Option<f64>> =
            vec![Some(1.0), Some(2.0), None, Some(3.0), Some(4.0)];
        // len 5, midpoint 2: first half gets indices 0..2, second 2..5
        let (pre, post) = split_at_midpoint(&growth);
        assert_eq!(pre, vec![1.0, 2.0]);
        assert_eq!(post, vec![3.0, 4.0]);
    }

    #[test]
    fn midpoint_split_empty() {
        let (pre, post) = split_at_midpoint(&[]);
        assert!(pre.is_empty());
        assert!(post.is_empty());
    }

    #[test]
    fn describe_matches_known_values() {
        let d = Describe::from_sample(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(d.count, 4);
        assert_abs_diff_eq!(d.mean, 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(d.std, (5.0f64 / 3.0).sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(d.q1, 1.75, epsilon = 1e-12);
        assert_abs_diff_eq!(d.median, 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(d.q3, 3.25, epsilon = 1e-12);
        assert_eq!(d.min, 1.0);
        assert_eq!(d.max, 4.0);
    }

    #[test]
    fn describe_rejects_empty_and_nan() {
        assert!(Describe::from_sample(&[]).is_err());
        assert!(Describe::from_sample(&[1.0, f64::NAN]).is_err());
    }

    proptest! {
        #[test]
        fn cleaned_series_has_no_zero_or_missing(
            obs in prop::collection::vec((2000i32..2030, prop::option::of(-1e6f64..1e6)), 0..40)
        ) {
            let series = AnnualSeries::from_raw(obs);
            prop_assert!(series.values().iter().all(|v| v.is_finite() && *v != 0.0));
            prop_assert_eq!(series.years().len(), series.values().len());
        }

        #[test]
        fn growth_is_one_shorter_than_input(values in prop::collection::vec(-1e6f64..1e6, 1..50)) {
            let growth = relative_growth(&values);
            prop_assert_eq!(growth.len(), values.len() - 1);
        }

        #[test]
        fn split_halves_partition_valid_entries(
            growth in prop::collection::vec(prop::option::of(-10f64..10.0), 0..30)
        ) {
            let (pre, post) = split_at_midpoint(&growth);
            let valid = growth.iter().flatten().count();
            prop_assert_eq!(pre.len() + post.len(), valid);
        }
    }
}
