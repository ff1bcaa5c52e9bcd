//! Macro time-series loader
//!
//! Reads a two-column (date, value) CSV such as the FRED real-GDP export. The
//! first column is parsed as an ISO date, the second as a numeric value; rows
//! with a non-numeric value cell (FRED writes `"."` for missing periods) are
//! skipped.

use std::path::Path;

use chrono::NaiveDate;
use econ_core::{Error, Result};
use serde::Deserialize;
use tracing::{debug, warn};

/// Raw (date, value) record; column order is fixed, names are ignored
#[derive(Debug, Deserialize)]
struct RawRow(String, String);

/// A dated univariate series, indexed in file order
#[derive(Debug, Clone, PartialEq)]
pub struct DatedSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl DatedSeries {
    /// Load a (date, value) CSV with a single header row
    ///
    /// Column names are not significant: the first column is the date, the
    /// second the value, matching the fixed layout of the source export.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(|e| match e.into_kind() {
            csv::ErrorKind::Io(io) => Error::Io(io),
            other => Error::InvalidInput(format!("{}: {other:?}", path.display())),
        })?;

        let mut dates = Vec::new();
        let mut values = Vec::new();
        for record in reader.deserialize::<RawRow>() {
            let RawRow(date_cell, value_cell) =
                record.map_err(|e| Error::InvalidInput(format!("{}: {e}", path.display())))?;
            let date = NaiveDate::parse_from_str(date_cell.trim(), "%Y-%m-%d").map_err(|e| {
                Error::InvalidInput(format!("bad date '{date_cell}' in {}: {e}", path.display()))
            })?;
            match value_cell.trim().parse::<f64>() {
                Ok(value) => {
                    dates.push(date);
                    values.push(value);
                }
                Err(_) => warn!(%date, cell = %value_cell, "skipping non-numeric observation"),
            }
        }

        if values.is_empty() {
            return Err(Error::InvalidInput(format!(
                "{}: no numeric observations",
                path.display()
            )));
        }

        debug!(observations = values.len(), path = %path.display(), "loaded dated series");
        Ok(Self { dates, values })
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Dates expressed as fractional years, for chart axes
    pub fn fractional_years(&self) -> Vec<f64> {
        self.dates
            .iter()
            .map(|d| fractional_year(*d))
            .collect()
    }
}

/// Convert a date to a fractional year (e.g. 1 July ≈ year + 0.5)
pub fn fractional_year(date: NaiveDate) -> f64 {
    use chrono::Datelike;
    date.year() as f64 + (date.ordinal0() as f64) / 365.25
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::io::Write;

    fn write_fixture(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_dated_series() {
        let file = write_fixture("DATE,GDPC1\n1947-01-01,2034.45\n1947-04-01,2029.024\n");
        let series = DatedSeries::from_csv(file.path()).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(
            series.dates()[0],
            NaiveDate::from_ymd_opt(1947, 1, 1).unwrap()
        );
        assert_abs_diff_eq!(series.values()[1], 2029.024, epsilon = 1e-9);
    }

    #[test]
    fn skips_missing_sentinel_rows() {
        let file = write_fixture("DATE,VALUE\n2020-01-01,100.0\n2020-04-01,.\n2020-07-01,101.0\n");
        let series = DatedSeries::from_csv(file.path()).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.values(), &[100.0, 101.0]);
    }

    #[test]
    fn bad_date_is_fatal() {
        let file = write_fixture("DATE,VALUE\nnot-a-date,1.0\n");
        assert!(DatedSeries::from_csv(file.path()).is_err());
    }

    #[test]
    fn empty_series_is_fatal() {
        let file = write_fixture("DATE,VALUE\n2020-01-01,.\n");
        assert!(DatedSeries::from_csv(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_fatal() {
        assert!(matches!(
            DatedSeries::from_csv("/nonexistent/gdp.csv").unwrap_err(),
            econ_core::Error::Io(_)
        ));
    }

    #[test]
    fn fractional_years_are_monotone_for_quarters() {
        let file = write_fixture(
            "DATE,VALUE\n2020-01-01,1.0\n2020-04-01,2.0\n2020-07-01,3.0\n2020-10-01,4.0\n",
        );
        let series = DatedSeries::from_csv(file.path()).unwrap();
        let xs = series.fractional_years();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
        assert_abs_diff_eq!(xs[0], 2020.0, epsilon = 1e-9);
    }
}
