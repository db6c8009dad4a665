//! Field Sensor Source Tests
//!
//! Absent, corrupt and well-formed micro:bit logs through the public source.

use forest_sentinel::acquisition::{AcquisitionError, FieldSensorSource, SensorLog};
use forest_sentinel::config::SourcesConfig;
use forest_sentinel::engine::score_sensor;

#[tokio::test]
async fn absent_log_is_empty_and_not_corrupt() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = FieldSensorSource::new(SensorLog::new(dir.path().join("microbit_log.csv"), false));

    let resolution = source.resolve().await;

    assert!(resolution.is_empty());
    assert!(!resolution.is_corrupt());
    assert!(resolution.failures[0].error.is_absent());
}

#[tokio::test]
async fn corrupt_log_is_empty_and_flagged() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("microbit_log.csv");
    std::fs::write(&path, "10,180,24\n11,bright,25\n").expect("write log");

    let resolution = FieldSensorSource::new(SensorLog::new(&path, false)).resolve().await;

    assert!(resolution.is_empty());
    assert!(resolution.is_corrupt());
    assert!(!resolution.failures[0].error.is_absent());
}

#[tokio::test]
async fn well_formed_log_is_loaded_and_scored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("microbit_log.csv");
    std::fs::write(&path, "Time,Light,Temp\n10, 180, 24\n11, 40, 18\n").expect("write log");

    let sources = SourcesConfig {
        sensor_path: path,
        sensor_has_header: true,
        ..SourcesConfig::default()
    };
    let resolution = FieldSensorSource::from_config(&sources).resolve().await;

    assert_eq!(resolution.source.as_deref(), Some("field-sensor"));
    assert_eq!(resolution.series.len(), 2);

    let rows = score_sensor(&resolution.series);
    assert_eq!(rows[0].risk_score, 84.0);
    assert_eq!(rows[1].risk_score, 18.0 * 2.0 + 8.0);
}

#[tokio::test]
async fn invalid_utf8_log_is_corrupt_not_io_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("microbit_log.csv");
    std::fs::write(&path, b"10,180,24\n11,200,2\xB05\n").expect("write log");

    let resolution = FieldSensorSource::new(SensorLog::new(&path, false)).resolve().await;

    assert!(resolution.is_empty());
    assert!(resolution.is_corrupt());
    assert!(matches!(
        resolution.failures[0].error,
        AcquisitionError::MalformedRow { line: 2, .. }
    ));
}
