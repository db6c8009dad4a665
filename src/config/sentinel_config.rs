//! Sentinel Configuration - station, source and scenario settings as TOML values
//!
//! Each struct implements `Default` with the built-in values from
//! [`super::defaults`], so a missing file or section behaves exactly like the
//! stock Lough Ouler deployment.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use super::defaults;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a sentinel deployment.
///
/// Load with `SentinelConfig::load()` which searches:
/// 1. `$SENTINEL_CONFIG` env var
/// 2. `./sentinel.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentinelConfig {
    /// Weather station identification
    #[serde(default)]
    pub station: StationConfig,

    /// Live / backup / sensor data locations
    #[serde(default)]
    pub sources: SourcesConfig,

    /// What-if projection options
    #[serde(default)]
    pub scenario: ScenarioConfig,

    /// Daily report output
    #[serde(default)]
    pub report: ReportConfig,
}

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "SENTINEL_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "sentinel.toml";

impl SentinelConfig {
    /// Load the deployment config.
    ///
    /// Candidate files are `$SENTINEL_CONFIG` (when set) and then
    /// `./sentinel.toml`. The first candidate that exists and validates is
    /// used; an unusable file is skipped with a warning. With no usable
    /// candidate the built-in Lough Ouler settings apply.
    pub fn load() -> Self {
        let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        if let Some(path) = explicit.as_deref().filter(|p| !p.exists()) {
            warn!(path = %path.display(), "{CONFIG_ENV_VAR} names a missing file");
        }

        let candidates: Vec<PathBuf> = explicit
            .into_iter()
            .chain(std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE)))
            .collect();
        Self::load_first(&candidates)
    }

    /// Use the first candidate file that exists and validates, else defaults.
    pub fn load_first(candidates: &[PathBuf]) -> Self {
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => {
                    info!(
                        path = %path.display(),
                        station = %config.station.id,
                        "Sentinel config loaded"
                    );
                    return config;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unusable config file");
                }
            }
        }

        info!(
            station = defaults::STATION_ID,
            "No usable config file, running with built-in station settings"
        );
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate settings for internal consistency.
    ///
    /// All problems are collected so a single run reports every mistake.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        if self.station.id.trim().is_empty() {
            errors.push("station.id must not be empty".to_string());
        }
        if !self.station.url_template.contains(defaults::STATION_PLACEHOLDER) {
            errors.push(format!(
                "station.url_template must contain '{}' (got '{}')",
                defaults::STATION_PLACEHOLDER,
                self.station.url_template
            ));
        }
        if self.sources.fetch_timeout_secs == 0 {
            errors.push("sources.fetch_timeout_secs must be > 0".to_string());
        }
        if self.sources.backup_path.as_os_str().is_empty() {
            errors.push("sources.backup_path must not be empty".to_string());
        }
        if self.sources.sensor_path.as_os_str().is_empty() {
            errors.push("sources.sensor_path must not be empty".to_string());
        }
        if self.report.output_path.as_os_str().is_empty() {
            errors.push("report.output_path must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Weather station identification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    /// Met Éireann station number
    #[serde(default = "default_station_id")]
    pub id: String,
    /// Location label printed in reports
    #[serde(default = "default_station_name")]
    pub name: String,
    /// Daily data URL; `{station}` is replaced with `id`
    #[serde(default = "default_url_template")]
    pub url_template: String,
}

fn default_station_id() -> String {
    defaults::STATION_ID.to_string()
}

fn default_station_name() -> String {
    defaults::STATION_NAME.to_string()
}

fn default_url_template() -> String {
    defaults::STATION_URL_TEMPLATE.to_string()
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            id: default_station_id(),
            name: default_station_name(),
            url_template: default_url_template(),
        }
    }
}

impl StationConfig {
    /// Fully resolved download URL for this station.
    pub fn url(&self) -> String {
        self.url_template
            .replace(defaults::STATION_PLACEHOLDER, &self.id)
    }
}

/// Data source locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Local copy of the station CSV
    #[serde(default = "default_backup_path")]
    pub backup_path: PathBuf,
    /// Micro:bit field log
    #[serde(default = "default_sensor_path")]
    pub sensor_path: PathBuf,
    /// Skip the first line of the sensor log
    #[serde(default)]
    pub sensor_has_header: bool,
    /// Live download timeout (seconds)
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_backup_path() -> PathBuf {
    PathBuf::from(defaults::BACKUP_WEATHER_PATH)
}

fn default_sensor_path() -> PathBuf {
    PathBuf::from(defaults::SENSOR_LOG_PATH)
}

fn default_fetch_timeout_secs() -> u64 {
    defaults::FETCH_TIMEOUT_SECS
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            backup_path: default_backup_path(),
            sensor_path: default_sensor_path(),
            sensor_has_header: false,
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl SourcesConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// What-if projection options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Also floor scenario columns at 0 (baseline-style two-sided clamp)
    #[serde(default)]
    pub symmetric_clamp: bool,
}

/// Daily report output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_report_output_path")]
    pub output_path: PathBuf,
}

fn default_report_output_path() -> PathBuf {
    PathBuf::from(defaults::REPORT_OUTPUT_PATH)
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: default_report_output_path(),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),
    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = SentinelConfig::default();
        assert!(config.validate().is_ok(), "Default config must always validate");
    }

    #[test]
    fn test_empty_toml_produces_defaults() {
        let config: SentinelConfig = toml::from_str("").expect("empty TOML should parse");
        assert_eq!(config, SentinelConfig::default());
        assert_eq!(config.station.id, "9820");
        assert_eq!(config.sources.fetch_timeout_secs, 8);
        assert!(!config.scenario.symmetric_clamp);
    }

    #[test]
    fn test_default_station_url() {
        let station = StationConfig::default();
        assert_eq!(
            station.url(),
            "https://cli.fusio.net/cli/climate_data/webdata/dly9820.csv"
        );
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: SentinelConfig = toml::from_str(
            r#"
[station]
id = "3723"
name = "Casement"
"#,
        )
        .expect("partial TOML should parse");
        assert_eq!(config.station.id, "3723");
        assert_eq!(config.station.url_template, defaults::STATION_URL_TEMPLATE);
        assert!(config.station.url().ends_with("dly3723.csv"));
        assert_eq!(config.sources, SourcesConfig::default());
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let mut config = SentinelConfig::default();
        config.station.id = " ".to_string();
        config.station.url_template = "https://example.invalid/data.csv".to_string();
        config.sources.fetch_timeout_secs = 0;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 3, "{errors:?}"),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let text = SentinelConfig::default().to_toml().expect("serialize");
        let back: SentinelConfig = toml::from_str(&text).expect("parse back");
        assert_eq!(back, SentinelConfig::default());
    }
}
