//! Bilateral observation table
//!
//! Loads a direct-investment CSV keyed by reporting country, counterpart
//! country and indicator, with one numeric column per year. Year cells that do
//! not parse as numbers (confidentiality sentinels such as `"C"`) become
//! missing values rather than errors.

use std::path::Path;

use econ_core::{Error, Result};
use tracing::debug;

const COUNTRY_COL: &str = "Country Name";
const COUNTERPART_COL: &str = "Counterpart Country Name";
const INDICATOR_COL: &str = "Indicator Name";

/// One row of the observation table
#[derive(Debug, Clone)]
struct Row {
    country: String,
    counterpart: String,
    indicator: String,
    /// Per-year values, aligned with `BilateralTable::years`
    values: Vec<Option<f64>>,
}

/// In-memory bilateral investment table
///
/// Rows are keyed by (country, counterpart, indicator); the year columns
/// requested at load time are coerced to numeric.
#[derive(Debug, Clone)]
pub struct BilateralTable {
    rows: Vec<Row>,
    years: Vec<i32>,
}

impl BilateralTable {
    /// Load the table from a CSV file, coercing the given year columns
    ///
    /// A missing or unreadable file is a fatal error. A year label absent
    /// from the header is an [`Error::InvalidInput`].
    pub fn from_csv(path: impl AsRef<Path>, years: &[i32]) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(|e| match e.into_kind() {
            csv::ErrorKind::Io(io) => Error::Io(io),
            other => Error::InvalidInput(format!("{}: {other:?}", path.display())),
        })?;

        let headers = reader
            .headers()
            .map_err(|e| Error::InvalidInput(format!("{}: {e}", path.display())))?
            .clone();

        let column = |name: &str| -> Result<usize> {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                Error::InvalidInput(format!("column '{name}' not found in {}", path.display()))
            })
        };
        let country_idx = column(COUNTRY_COL)?;
        let counterpart_idx = column(COUNTERPART_COL)?;
        let indicator_idx = column(INDICATOR_COL)?;

        let year_indices = years
            .iter()
            .map(|year| column(&year.to_string()))
            .collect::<Result<Vec<_>>>()?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record =
                record.map_err(|e| Error::InvalidInput(format!("{}: {e}", path.display())))?;
            let values = year_indices
                .iter()
                .map(|&idx| record.get(idx).and_then(parse_numeric))
                .collect();
            rows.push(Row {
                country: record.get(country_idx).unwrap_or_default().to_string(),
                counterpart: record.get(counterpart_idx).unwrap_or_default().to_string(),
                indicator: record.get(indicator_idx).unwrap_or_default().to_string(),
                values,
            });
        }

        debug!(rows = rows.len(), years = years.len(), path = %path.display(), "loaded bilateral table");
        Ok(Self {
            rows,
            years: years.to_vec(),
        })
    }

    /// Year labels this table was loaded with
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum matching rows per year
    ///
    /// Selects rows where country and counterpart match exactly and the
    /// indicator name contains `indicator_filter` (case-sensitive substring).
    /// Values are summed per year across the selection with missing entries
    /// contributing zero. Returns `None` when no row matches: that is the
    /// defined "no data" outcome, not an error.
    pub fn sum_matching(
        &self,
        country: &str,
        counterpart: &str,
        indicator_filter: &str,
    ) -> Option<Vec<(i32, f64)>> {
        let selected: Vec<&Row> = self
            .rows
            .iter()
            .filter(|row| {
                row.country == country
                    && row.counterpart == counterpart
                    && row.indicator.contains(indicator_filter)
            })
            .collect();

        if selected.is_empty() {
            return None;
        }

        let sums = self
            .years
            .iter()
            .enumerate()
            .map(|(i, &year)| {
                let sum = selected
                    .iter()
                    .filter_map(|row| row.values[i])
                    .sum::<f64>();
                (year, sum)
            })
            .collect();
        Some(sums)
    }
}

/// Numeric coercion for a single cell
///
/// Empty cells and non-numeric sentinels map to `None`.
fn parse_numeric(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
