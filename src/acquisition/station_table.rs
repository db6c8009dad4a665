//! Met Éireann daily station table parser
//!
//! The daily CSV starts with a fixed block of free-text header lines
//! (station name, coordinates, column legend) followed by a comma-delimited
//! table whose first row holds the column names. Only `date`, `maxtp` and
//! `rain` are used. Names match exactly after trimming, and since the table
//! repeats `ind` flag columns the first column with a wanted name wins.
//!
//! Blank or unparseable `maxtp` / `rain` values are replaced with defaults
//! rather than rejecting the row.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};

use super::AcquisitionError;
use crate::config::defaults::{
    DEFAULT_MAX_TEMPERATURE, DEFAULT_RAINFALL_MM, STATION_PREAMBLE_ROWS,
};
use crate::types::{ObservationSeries, WeatherObservation};

const DATE_COLUMN: &str = "date";
const MAX_TEMPERATURE_COLUMN: &str = "maxtp";
const RAINFALL_COLUMN: &str = "rain";

/// Date layouts seen in station exports and hand-made backups.
const DATE_FORMATS: &[&str] = &["%d-%b-%Y", "%Y-%m-%d", "%d/%m/%Y"];

/// Parse a daily station export (live download or backup copy).
pub fn parse_station_table(
    text: &str,
) -> Result<ObservationSeries<WeatherObservation>, AcquisitionError> {
    let table = strip_preamble(text, STATION_PREAMBLE_ROWS)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(table.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut rows = Vec::new();
    let mut defaulted_fields = 0usize;
    for record in reader.records() {
        let record = record?;
        let (observation, defaulted) = columns.observation(&record);
        defaulted_fields += defaulted;
        rows.push(observation);
    }

    if defaulted_fields > 0 {
        tracing::debug!(
            rows = rows.len(),
            defaulted_fields,
            "Station table had blank or unparseable values, defaults applied"
        );
    }

    Ok(ObservationSeries::new(rows))
}

/// Drop the first `rows` lines, returning the remainder.
fn strip_preamble(text: &str, rows: usize) -> Result<&str, AcquisitionError> {
    let mut rest = text;
    for consumed in 0..rows {
        match rest.find('\n') {
            Some(idx) => rest = &rest[idx + 1..],
            None => {
                return Err(AcquisitionError::Preamble {
                    expected: rows,
                    found: consumed + usize::from(!rest.is_empty()),
                })
            }
        }
    }
    Ok(rest)
}

/// Positions of the wanted columns in the table header.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    date: Option<usize>,
    max_temperature: usize,
    rainfall: usize,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, AcquisitionError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Ok(Self {
            date: find(DATE_COLUMN),
            max_temperature: find(MAX_TEMPERATURE_COLUMN)
                .ok_or(AcquisitionError::MissingColumn(MAX_TEMPERATURE_COLUMN))?,
            rainfall: find(RAINFALL_COLUMN)
                .ok_or(AcquisitionError::MissingColumn(RAINFALL_COLUMN))?,
        })
    }

    /// Build an observation from one record, returning how many numeric
    /// fields fell back to their default.
    fn observation(&self, record: &StringRecord) -> (WeatherObservation, usize) {
        let date_label = self
            .date
            .and_then(|idx| record.get(idx))
            .unwrap_or_default()
            .to_string();
        let max_temperature = coerce(record.get(self.max_temperature));
        let rainfall_mm = coerce(record.get(self.rainfall));
        let defaulted =
            usize::from(max_temperature.is_none()) + usize::from(rainfall_mm.is_none());

        let observation = WeatherObservation {
            date: parse_date(&date_label),
            date_label,
            max_temperature: max_temperature.unwrap_or(DEFAULT_MAX_TEMPERATURE),
            rainfall_mm: rainfall_mm.unwrap_or(DEFAULT_RAINFALL_MM),
        };
        (observation, defaulted)
    }
}

/// Numeric field value, `None` for blank, unparseable or non-finite input.
fn coerce(field: Option<&str>) -> Option<f64> {
    field
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn parse_date(label: &str) -> Option<NaiveDate> {
    if label.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(label, fmt).ok())
}
