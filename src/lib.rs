//! Forest Sentinel: Fire Risk Scoring
//!
//! Turns daily station weather (Met Éireann) or micro:bit field sensor logs
//! into a bounded fire risk series, with what-if projections and a daily
//! status report.
//!
//! ## Architecture
//!
//! - **Acquisition**: tiered sources (live station, local backup, field log)
//!   that always degrade to an empty series instead of failing
//! - **Engine**: weather scoring fold with a dry-run counter, stateless
//!   sensor scoring, scenario projection
//! - **Report**: average risk, LOW / MODERATE / CRITICAL status, text summary

pub mod acquisition;
pub mod config;
pub mod engine;
pub mod report;
pub mod types;

// Re-export configuration
pub use config::SentinelConfig;

// Re-export commonly used types
pub use types::{
    ObservationSeries, RiskRow, RiskStatus, ScenarioRow, SensorObservation, WeatherObservation,
};

// Re-export acquisition entry points
pub use acquisition::{
    weather_chain, AcquisitionError, FallbackChain, FieldSensorSource, Resolution,
};

// Re-export engine
pub use engine::{project, score_sensor, score_weather, EngineState, ScenarioClamp};

// Re-export reporting
pub use report::{summarize, DailyReport, RiskSummary};
