//! System-wide default constants.
//!
//! Structural constants of the upstream data formats and the built-in values
//! behind every `SentinelConfig` default.

// ============================================================================
// Upstream Formats
// ============================================================================

/// Non-tabular header lines at the top of a Met Éireann daily CSV.
///
/// Shared by the live download and the local backup copy.
pub const STATION_PREAMBLE_ROWS: usize = 15;

/// Most recent observations kept for a weather scoring pass.
pub const RECENCY_WINDOW: usize = 30;

/// `maxtp` value substituted when the field is blank or unparseable (°C).
pub const DEFAULT_MAX_TEMPERATURE: f64 = 10.0;

/// `rain` value substituted when the field is blank or unparseable (mm).
pub const DEFAULT_RAINFALL_MM: f64 = 0.0;

// ============================================================================
// Station
// ============================================================================

/// Met Éireann station number (Lough Ouler / Wicklow area).
pub const STATION_ID: &str = "9820";

/// Human-readable station location used in reports.
pub const STATION_NAME: &str = "Lough Ouler";

/// Per-station daily data URL. `{station}` is replaced with the station id.
pub const STATION_URL_TEMPLATE: &str =
    "https://cli.fusio.net/cli/climate_data/webdata/dly{station}.csv";

/// Placeholder substituted in [`STATION_URL_TEMPLATE`].
pub const STATION_PLACEHOLDER: &str = "{station}";

// ============================================================================
// Sources
// ============================================================================

/// HTTP timeout for the live station download (seconds).
pub const FETCH_TIMEOUT_SECS: u64 = 8;

/// Local copy of the station CSV used when the download fails.
pub const BACKUP_WEATHER_PATH: &str = "backup_weather.csv";

/// Micro:bit field log.
pub const SENSOR_LOG_PATH: &str = "microbit_log.csv";

// ============================================================================
// Report
// ============================================================================

/// Default destination of the daily text report.
pub const REPORT_OUTPUT_PATH: &str = "DAILY_FOREST_REPORT.txt";
