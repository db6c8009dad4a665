//! Observation types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily station observation (Met Éireann `dly` format)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Parsed calendar date, `None` when the label is absent or unrecognised
    pub date: Option<NaiveDate>,
    /// Raw date label as it appeared in the source table
    pub date_label: String,
    /// Maximum air temperature (°C) - `maxtp`
    pub max_temperature: f64,
    /// Precipitation amount (mm) - `rain`
    pub rainfall_mm: f64,
}

impl WeatherObservation {
    /// Observation with an unset date; convenient for tests and synthetic series.
    pub fn new(max_temperature: f64, rainfall_mm: f64) -> Self {
        Self {
            date: None,
            date_label: String::new(),
            max_temperature,
            rainfall_mm,
        }
    }

    /// Attach a calendar date (label is rendered as ISO-8601).
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date_label = date.format("%Y-%m-%d").to_string();
        self.date = Some(date);
        self
    }
}

/// Field sensor reading (micro:bit log: time, light, temperature)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorObservation {
    /// Sample counter as logged by the device
    pub time_index: i64,
    /// Raw ambient light level, 0-255
    pub light_level: u8,
    /// Temperature (°C)
    pub temperature: f64,
}

/// Ordered, immutable sequence of observations.
///
/// Order is arrival order and is significant: the weather scoring pass carries
/// state from row to row. There is no mutable access; derived series are
/// always new collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservationSeries<T> {
    rows: Vec<T>,
}

impl<T> ObservationSeries<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    /// The most recent `window` rows (all rows when the series is shorter).
    pub fn recent(&self, window: usize) -> &[T] {
        let start = self.rows.len().saturating_sub(window);
        &self.rows[start..]
    }
}

impl<T> Default for ObservationSeries<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> FromIterator<T> for ObservationSeries<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ObservationSeries<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
