//! Field Sensor Source
//!
//! Reads the CSV dumped by the micro:bit field unit. Each record holds three
//! positional fields: sample counter, light level (0-255) and temperature.
//! There is a single tier: a missing log yields an empty series, a malformed
//! log is reported as corrupt and also yields an empty series.

use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{error, info};

use super::{read_local, AcquisitionError, FallbackChain, Resolution, SeriesResolver};
use crate::config::SourcesConfig;
use crate::types::{ObservationSeries, SensorObservation};

const FIELD_COUNT: usize = 3;

/// Parse a micro:bit log. Any bad record fails the whole log.
pub fn parse_sensor_log(
    text: &str,
    has_header: bool,
) -> Result<ObservationSeries<SensorObservation>, AcquisitionError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(parse_record(&record)?);
    }
    Ok(ObservationSeries::new(rows))
}

fn parse_record(record: &StringRecord) -> Result<SensorObservation, AcquisitionError> {
    let line = record.position().map_or(0, csv::Position::line);
    if record.len() != FIELD_COUNT {
        return Err(AcquisitionError::MalformedRow {
            line,
            reason: format!("expected {FIELD_COUNT} fields, found {}", record.len()),
        });
    }

    let temperature: f64 = field(record, 2, "temperature", line)?;
    if !temperature.is_finite() {
        return Err(AcquisitionError::MalformedRow {
            line,
            reason: format!("temperature '{}' is not a finite number", &record[2]),
        });
    }

    Ok(SensorObservation {
        time_index: field(record, 0, "time", line)?,
        light_level: field(record, 1, "light", line)?,
        temperature,
    })
}

fn field<V: FromStr>(
    record: &StringRecord,
    idx: usize,
    name: &str,
    line: u64,
) -> Result<V, AcquisitionError> {
    let raw = &record[idx];
    raw.parse().map_err(|_| AcquisitionError::MalformedRow {
        line,
        reason: format!("invalid {name} value '{raw}'"),
    })
}

/// The micro:bit log file as a resolver tier.
#[derive(Debug, Clone)]
pub struct SensorLog {
    path: PathBuf,
    has_header: bool,
}

impl SensorLog {
    pub fn new(path: impl AsRef<Path>, has_header: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            has_header,
        }
    }
}

#[async_trait]
impl SeriesResolver<SensorObservation> for SensorLog {
    async fn resolve(&self) -> Result<ObservationSeries<SensorObservation>, AcquisitionError> {
        info!(path = %self.path.display(), "Reading micro:bit field data");
        let text = read_local(&self.path).await?;
        parse_sensor_log(&text, self.has_header)
    }

    fn tier_name(&self) -> &str {
        "field-sensor"
    }
}

/// Single-tier source for field sensor readings.
pub struct FieldSensorSource {
    chain: FallbackChain<SensorObservation>,
}

impl FieldSensorSource {
    pub fn new(log: SensorLog) -> Self {
        Self {
            chain: FallbackChain::new().with_tier(log),
        }
    }

    pub fn from_config(sources: &SourcesConfig) -> Self {
        Self::new(SensorLog::new(&sources.sensor_path, sources.sensor_has_header))
    }

    /// Resolve the log. Never fails; inspect [`Resolution::failures`] to tell
    /// an absent log from a corrupt one.
    pub async fn resolve(&self) -> Resolution<SensorObservation> {
        let resolution = self.chain.resolve().await;
        for failure in &resolution.failures {
            if failure.error.is_absent() {
                error!(error = %failure.error, "Field sensor log not found");
            } else {
                error!(error = %failure.error, "Corrupt field sensor log");
            }
        }
        if resolution.source.is_some() {
            info!(readings = resolution.series.len(), "Field sensor readings loaded");
        }
        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_headerless_log() {
        let series = parse_sensor_log("10, 180, 24\n11,200,25.5\n", false).expect("valid log");
        assert_eq!(
            series.as_slice(),
            &[
                SensorObservation {
                    time_index: 10,
                    light_level: 180,
                    temperature: 24.0,
                },
                SensorObservation {
                    time_index: 11,
                    light_level: 200,
                    temperature: 25.5,
                },
            ]
        );
    }

    #[test]
    fn test_header_row_is_skipped_when_configured() {
        let series = parse_sensor_log("Time,Light,Temp\n1,50,12\n", true).expect("valid log");
        assert_eq!(series.len(), 1);
        assert_eq!(series.as_slice()[0].light_level, 50);
    }

    #[test]
    fn test_header_row_without_flag_is_corrupt() {
        let err = parse_sensor_log("Time,Light,Temp\n1,50,12\n", false)
            .expect_err("header is not data");
        assert!(matches!(err, AcquisitionError::MalformedRow { line: 1, .. }));
    }

    #[test]
    fn test_light_out_of_range_is_corrupt() {
        let err = parse_sensor_log("1,50,12\n2,300,12\n", false).expect_err("light > 255");
        match err {
            AcquisitionError::MalformedRow { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("light"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_field_count_is_corrupt() {
        let err = parse_sensor_log("1,50\n", false).expect_err("two fields");
        assert!(err.is_malformed());
    }

    #[test]
    fn test_non_finite_temperature_is_corrupt() {
        assert!(parse_sensor_log("1,50,NaN\n", false).is_err());
    }

    #[test]
    fn test_empty_log_is_empty_series() {
        let series = parse_sensor_log("", false).expect("empty log parses");
        assert!(series.is_empty());
    }
}
