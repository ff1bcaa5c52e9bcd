//! PNG chart rendering
//!
//! All charts render through the plotters bitmap backend into the report
//! directory. Rendering failures surface as [`Error::Render`].

use std::path::Path;

use econ_core::{Error, Result};
use plotters::prelude::*;
use tracing::info;

const CHART_SIZE: (u32, u32) = (900, 540);
const CAPTION_FONT: (&str, u32) = ("sans-serif", 22);

fn render_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

/// Min/max of a value set, padded so flat series still get a visible band
fn padded_range<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((max - min) * 0.05).max((max.abs() * 0.01).max(1e-9));
    (min - pad, max + pad)
}

fn check_aligned(xs: usize, ys: usize) -> Result<()> {
    if xs == 0 {
        return Err(Error::InvalidInput("nothing to plot".to_string()));
    }
    if xs != ys {
        return Err(Error::InvalidInput(format!(
            "x/y length mismatch: {xs} vs {ys}"
        )));
    }
    Ok(())
}

/// Yearly investment trend with point markers and an optional year marker line
pub fn investment_trend_chart(
    path: &Path,
    title: &str,
    years: &[i32],
    values: &[f64],
    marker_year: Option<i32>,
) -> Result<()> {
    check_aligned(years.len(), values.len())?;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let x_min = years.iter().copied().min().unwrap_or(0) - 1;
    let x_max = years.iter().copied().max().unwrap_or(0) + 1;
    let (y_min, y_max) = padded_range(values.iter());

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Investment (USD)")
        .draw()
        .map_err(render_err)?;

    if let Some(marker) = marker_year {
        if (x_min..=x_max).contains(&marker) {
            chart
                .draw_series(DashedLineSeries::new(
                    [(marker, y_min), (marker, y_max)],
                    6,
                    4,
                    RGBColor(128, 128, 128).into(),
                ))
                .map_err(render_err)?;
        }
    }

    let points: Vec<(i32, f64)> = years.iter().copied().zip(values.iter().copied()).collect();
    chart
        .draw_series(LineSeries::new(points.clone(), &BLUE))
        .map_err(render_err)?;
    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
        )
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!(path = %path.display(), "wrote chart");
    Ok(())
}

/// Original series overlaid with its trend component
pub fn decomposition_chart(
    path: &Path,
    title: &str,
    xs: &[f64],
    original: &[f64],
    trend: &[f64],
) -> Result<()> {
    check_aligned(xs.len(), original.len())?;
    check_aligned(xs.len(), trend.len())?;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let (y_min, y_max) = padded_range(original.iter().chain(trend.iter()));
    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(xs[0]..xs[xs.len() - 1], y_min..y_max)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .x_desc("Year")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            xs.iter().copied().zip(original.iter().copied()),
            &BLUE,
        ))
        .map_err(render_err)?
        .label("Actual")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLUE));
    chart
        .draw_series(LineSeries::new(
            xs.iter().copied().zip(trend.iter().copied()),
            &RED,
        ))
        .map_err(render_err)?
        .label("Trend")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!(path = %path.display(), "wrote chart");
    Ok(())
}

/// Single line chart with labeled axes
pub fn series_chart(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    xs: &[f64],
    values: &[f64],
) -> Result<()> {
    check_aligned(xs.len(), values.len())?;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let (y_min, y_max) = padded_range(values.iter());
    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(xs[0]..xs[xs.len() - 1], y_min..y_max)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            xs.iter().copied().zip(values.iter().copied()),
            &RGBColor(230, 126, 34),
        ))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!(path = %path.display(), "wrote chart");
    Ok(())
}

/// Stem chart of correlations by lag, with a zero baseline
pub fn autocorrelation_chart(path: &Path, title: &str, correlations: &[f64]) -> Result<()> {
    if correlations.is_empty() {
        return Err(Error::InvalidInput("nothing to plot".to_string()));
    }

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let n = correlations.len();
    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..n as f64, -1.1f64..1.1f64)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .x_desc("Lag")
        .y_desc("Autocorrelation")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            [(0.0, 0.0), (n as f64, 0.0)],
            &RGBColor(128, 128, 128),
        ))
        .map_err(render_err)?;
    chart
        .draw_series(correlations.iter().enumerate().map(|(k, &r)| {
            PathElement::new(vec![(k as f64, 0.0), (k as f64, r)], BLACK)
        }))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!(path = %path.display(), "wrote chart");
    Ok(())
}

/// History plus point forecast with confidence bounds
#[allow(clippy::too_many_arguments)]
pub fn forecast_chart(
    path: &Path,
    title: &str,
    history_xs: &[f64],
    history: &[f64],
    forecast_xs: &[f64],
    point: &[f64],
    lower: &[f64],
    upper: &[f64],
) -> Result<()> {
    check_aligned(history_xs.len(), history.len())?;
    check_aligned(forecast_xs.len(), point.len())?;
    check_aligned(forecast_xs.len(), lower.len())?;
    check_aligned(forecast_xs.len(), upper.len())?;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let (y_min, y_max) = padded_range(
        history
            .iter()
            .chain(point.iter())
            .chain(lower.iter())
            .chain(upper.iter()),
    );
    let x_min = history_xs[0];
    let x_max = forecast_xs[forecast_xs.len() - 1];

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .x_desc("Year")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            history_xs.iter().copied().zip(history.iter().copied()),
            &BLUE,
        ))
        .map_err(render_err)?
        .label("History")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLUE));
    chart
        .draw_series(LineSeries::new(
            forecast_xs.iter().copied().zip(point.iter().copied()),
            &RED,
        ))
        .map_err(render_err)?
        .label("Forecast")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], RED));
    for bound in [lower, upper] {
        chart
            .draw_series(LineSeries::new(
                forecast_xs.iter().copied().zip(bound.iter().copied()),
                &RGBColor(128, 128, 128),
            ))
            .map_err(render_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!(path = %path.display(), "wrote chart");
    Ok(())
}

/// Fixed-width histogram of a sample
pub fn histogram_chart(path: &Path, title: &str, values: &[f64], bins: usize) -> Result<()> {
    if values.is_empty() {
        return Err(Error::InvalidInput("nothing to plot".to_string()));
    }
    if bins == 0 {
        return Err(Error::InvalidParameter("need at least one bin".to_string()));
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Flat samples still get one visible bar.
    let (min, max) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let width = (max - min) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    let y_max = counts.iter().copied().max().unwrap_or(1) as f64 * 1.1;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(min..max, 0f64..y_max)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .y_desc("Frequency")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(counts.iter().enumerate().map(|(i, &c)| {
            let left = min + i as f64 * width;
            Rectangle::new(
                [(left, 0.0), (left + width, c as f64)],
                BLUE.mix(0.45).filled(),
            )
        }))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!(path = %path.display(), "wrote chart");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn out(tmp: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
        tmp.path().join(name)
    }

    fn assert_png(path: &Path) {
        let meta = std::fs::metadata(path).unwrap();
        assert!(meta.len() > 0, "empty chart file {}", path.display());
    }

    #[test]
    fn renders_investment_trend() {
        let tmp = tempfile::tempdir().unwrap();
        let path = out(&tmp, "trend.png");
        let years: Vec<i32> = (2009..2023).collect();
        let values: Vec<f64> = (0..14).map(|i| 100.0 + 10.0 * i as f64).collect();
        investment_trend_chart(&path, "Outward Investment Trend", &years, &values, Some(2019))
            .unwrap();
        assert_png(&path);
    }

    #[test]
    fn renders_decomposition_and_series() {
        let tmp = tempfile::tempdir().unwrap();
        let xs: Vec<f64> = (0..40).map(|i| 2000.0 + i as f64 * 0.25).collect();
        let original: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
        let trend = original.clone();

        let p1 = out(&tmp, "decomp.png");
        decomposition_chart(&p1, "GDP and Trend", &xs, &original, &trend).unwrap();
        assert_png(&p1);

        let p2 = out(&tmp, "cycle.png");
        series_chart(&p2, "Cycle", "Year", "Deviation", &xs, &original).unwrap();
        assert_png(&p2);
    }

    #[test]
    fn renders_acf_forecast_and_histogram() {
        let tmp = tempfile::tempdir().unwrap();

        let acf_path = out(&tmp, "acf.png");
        let correlations: Vec<f64> = (0..30).map(|k| 0.9f64.powi(k)).collect();
        autocorrelation_chart(&acf_path, "Cycle ACF", &correlations).unwrap();
        assert_png(&acf_path);

        let fc_path = out(&tmp, "forecast.png");
        let hist_xs: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let hist: Vec<f64> = (0..20).map(|i| (i as f64 * 0.3).sin()).collect();
        let fxs: Vec<f64> = (20..28).map(|i| i as f64).collect();
        let point = vec![0.1; 8];
        let lower = vec![-0.5; 8];
        let upper = vec![0.7; 8];
        forecast_chart(
            &fc_path, "Forecast", &hist_xs, &hist, &fxs, &point, &lower, &upper,
        )
        .unwrap();
        assert_png(&fc_path);

        let hist_path = out(&tmp, "hist.png");
        let sample: Vec<f64> = (0..200).map(|i| ((i * 13 + 7) % 41) as f64 / 10.0).collect();
        histogram_chart(&hist_path, "Cycle Histogram", &sample, 20).unwrap();
        assert_png(&hist_path);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let tmp = tempfile::tempdir().unwrap();
        let path = out(&tmp, "bad.png");
        assert!(investment_trend_chart(&path, "t", &[2009, 2010], &[1.0], None).is_err());
        assert!(series_chart(&path, "t", "x", "y", &[], &[]).is_err());
        assert!(histogram_chart(&path, "t", &[], 10).is_err());
    }
}
