//! Periodogram power spectral density
//!
//! One-sided periodogram of a demeaned series at a given sampling rate,
//! computed through a forward FFT.

use econ_core::{Error, Result};
use num_complex::Complex;
use rustfft::FftPlanner;

/// One-sided power spectral density estimate
#[derive(Debug, Clone, PartialEq)]
pub struct Periodogram {
    /// Frequencies in cycles per unit time, `0..=fs/2`
    pub frequencies: Vec<f64>,
    /// Power density at each frequency; non-negative by construction
    pub power: Vec<f64>,
}

impl Periodogram {
    /// Frequency with maximal power, excluding the zero-frequency bin
    pub fn peak_frequency(&self) -> Option<f64> {
        self.frequencies
            .iter()
            .zip(self.power.iter())
            .skip(1)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(f, _)| *f)
    }
}

/// Estimate the periodogram of `series` sampled at `fs` samples per unit time
///
/// The series is demeaned before transforming; power is scaled by 1/(fs·n)
/// with interior bins doubled to fold the negative frequencies in.
pub fn periodogram(series: &[f64], fs: f64) -> Result<Periodogram> {
    let n = series.len();
    if n < 2 {
        return Err(Error::too_short(2, n));
    }
    if !fs.is_finite() || fs <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "sampling rate must be positive and finite, got {fs}"
        )));
    }
    if series.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite("series"));
    }

    let mean = series.iter().sum::<f64>() / n as f64;
    let mut buffer: Vec<Complex<f64>> = series
        .iter()
        .map(|v| Complex::new(v - mean, 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    let half = n / 2;
    let scale = 1.0 / (fs * n as f64);
    let mut frequencies = Vec::with_capacity(half + 1);
    let mut power = Vec::with_capacity(half + 1);
    for k in 0..=half {
        let mut p = buffer[k].norm_sqr() * scale;
        // Fold negative frequencies into the interior bins; DC and (for even
        // n) the Nyquist bin have no mirror image.
        let is_nyquist = n % 2 == 0 && k == half;
        if k != 0 && !is_nyquist {
            p *= 2.0;
        }
        frequencies.push(k as f64 * fs / n as f64);
        power.push(p);
    }

    Ok(Periodogram { frequencies, power })
}
