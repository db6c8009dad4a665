//! Config Loading Tests
//!
//! File-based loading and validation of `SentinelConfig`.

use forest_sentinel::config::{ConfigError, SentinelConfig};

#[test]
fn valid_file_loads() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sentinel.toml");
    std::fs::write(
        &path,
        r#"
[station]
id = "3904"
name = "Cork Airport"

[sources]
backup_path = "data/cork_backup.csv"
fetch_timeout_secs = 4

[scenario]
symmetric_clamp = true
"#,
    )
    .expect("write config");

    let config = SentinelConfig::load_from_file(&path).expect("config should load");
    assert_eq!(config.station.name, "Cork Airport");
    assert!(config.station.url().ends_with("dly3904.csv"));
    assert_eq!(config.sources.fetch_timeout_secs, 4);
    assert!(config.scenario.symmetric_clamp);
    assert_eq!(config.sources.sensor_path.to_str(), Some("microbit_log.csv"));
}

#[test]
fn invalid_values_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sentinel.toml");
    std::fs::write(&path, "[sources]\nfetch_timeout_secs = 0\n").expect("write config");

    match SentinelConfig::load_from_file(&path) {
        Err(ConfigError::Validation(errors)) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("fetch_timeout_secs"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sentinel.toml");
    std::fs::write(&path, "[station\nid = 1\n").expect("write config");

    assert!(matches!(
        SentinelConfig::load_from_file(&path),
        Err(ConfigError::Parse(_, _))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(matches!(
        SentinelConfig::load_from_file(&dir.path().join("nope.toml")),
        Err(ConfigError::Io(_, _))
    ));
}

#[test]
fn first_usable_candidate_wins() {
    let dir = tempfile::tempdir().expect("tempdir");
    let broken = dir.path().join("broken.toml");
    let good = dir.path().join("good.toml");
    std::fs::write(&broken, "[sources]\nfetch_timeout_secs = 0\n").expect("write config");
    std::fs::write(&good, "[station]\nid = \"3723\"\n").expect("write config");

    let config = SentinelConfig::load_first(&[
        dir.path().join("absent.toml"),
        broken,
        good,
    ]);
    assert_eq!(config.station.id, "3723");
}

#[test]
fn no_usable_candidate_gives_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let broken = dir.path().join("broken.toml");
    std::fs::write(&broken, "[station\n").expect("write config");

    let config = SentinelConfig::load_first(&[dir.path().join("absent.toml"), broken]);
    assert_eq!(config, SentinelConfig::default());
}
