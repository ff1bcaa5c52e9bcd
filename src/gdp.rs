//! GDP cycle decomposition pipeline
//!
//! Loads a quarterly real-GDP series, splits it into trend and cycle with the
//! Hodrick–Prescott filter, and examines the cyclical component from several
//! angles: descriptive statistics, autocorrelation, periodogram power
//! spectrum, an AR(2) fit with an 8-quarter interval forecast, and an
//! augmented Dickey–Fuller unit-root test. Every artifact lands in the
//! output directory under a fixed name.

use std::path::PathBuf;

use econ_core::{Describe, Result};
use econ_data::DatedSeries;
use econ_filter::{acf, hp_filter, periodogram, QUARTERLY_LAMBDA};
use econ_forecast::ArModel;
use econ_inference::{adf_test, AdfTest};
use econ_report::{
    autocorrelation_chart, decomposition_chart, forecast_chart, histogram_chart, series_chart,
    ReportDir,
};
use tracing::info;

/// Autoregressive order of the cycle model
pub const AR_ORDER: usize = 2;
/// Forecast horizon in quarters
pub const FORECAST_HORIZON: usize = 8;
/// Two-sided confidence level of the forecast bounds
pub const CONFIDENCE_LEVEL: f64 = 0.95;
/// Quarterly observations per year, the periodogram sampling rate
pub const SAMPLING_RATE: f64 = 4.0;
/// Bin count for the cycle histogram
const HISTOGRAM_BINS: usize = 30;

/// Configuration for one decomposition run
#[derive(Debug, Clone)]
pub struct GdpConfig {
    pub csv_path: PathBuf,
    pub out_dir: PathBuf,
}

impl GdpConfig {
    pub fn new(csv_path: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
            out_dir: out_dir.into(),
        }
    }
}

/// Run the decomposition analysis end to end
pub fn run(config: &GdpConfig) -> Result<()> {
    let series = DatedSeries::from_csv(&config.csv_path)?;
    let report = ReportDir::create(&config.out_dir)?;
    let xs = series.fractional_years();

    let decomposition = hp_filter(series.values(), QUARTERLY_LAMBDA)?;
    info!(observations = series.len(), "decomposed series");

    decomposition_chart(
        &report.file("gdp_trend.png"),
        "Real GDP and Trend Component",
        &xs,
        series.values(),
        &decomposition.trend,
    )?;
    series_chart(
        &report.file("gdp_cycle.png"),
        "Cyclical Component of Real GDP",
        "Year",
        "Deviation from trend",
        &xs,
        &decomposition.cycle,
    )?;

    let stats = Describe::from_sample(&decomposition.cycle)?;
    report.write_text(
        "cycle_stats.txt",
        &format!("Cyclical component summary\n\n{stats}\n"),
    )?;

    let correlations = acf(&decomposition.cycle)?;
    autocorrelation_chart(
        &report.file("cycle_acf.png"),
        "Autocorrelation of the Cyclical Component",
        &correlations,
    )?;

    let spectrum = periodogram(&decomposition.cycle, SAMPLING_RATE)?;
    series_chart(
        &report.file("cycle_spectrum.png"),
        "Power Spectrum of the Cyclical Component",
        "Frequency (cycles per year)",
        "Power",
        &spectrum.frequencies,
        &spectrum.power,
    )?;

    let model = ArModel::fit(&decomposition.cycle, AR_ORDER)?;
    report.write_text("arima_summary.txt", &model.summary())?;

    let forecast = model.forecast(FORECAST_HORIZON, CONFIDENCE_LEVEL)?;
    // hp_filter already rejected series shorter than three observations
    let last_x = xs[xs.len() - 1];
    let forecast_xs: Vec<f64> = (1..=FORECAST_HORIZON)
        .map(|h| last_x + 0.25 * h as f64)
        .collect();
    forecast_chart(
        &report.file("cycle_forecast.png"),
        "Cyclical Component: 8-Quarter Forecast",
        &xs,
        &decomposition.cycle,
        &forecast_xs,
        &forecast.point,
        &forecast.lower,
        &forecast.upper,
    )?;

    let adf = adf_test(&decomposition.cycle, None)?;
    report.write_text("adf_test.txt", &format_adf(&adf))?;

    histogram_chart(
        &report.file("cycle_histogram.png"),
        "Distribution of the Cyclical Component",
        &decomposition.cycle,
        HISTOGRAM_BINS,
    )?;

    info!(out_dir = %report.path().display(), "decomposition reports written");
    Ok(())
}

fn format_adf(adf: &AdfTest) -> String {
    format!(
        "Augmented Dickey-Fuller test on the cyclical component\n\n\
         statistic: {:.6}\n\
         p-value: {:.6}\n\
         lags used: {}\n\
         observations: {}\n\
         critical values: 1%: {:.2}, 5%: {:.2}, 10%: {:.2}\n\
         unit root rejected at 5%: {}\n",
        adf.statistic,
        adf.p_value,
        adf.lags,
        adf.n_obs,
        adf.critical_values.pct_1,
        adf.critical_values.pct_5,
        adf.critical_values.pct_10,
        if adf.rejects_unit_root() { "yes" } else { "no" },
    )
}
