//! Risk Engine
//!
//! Deterministic, rule-based fire risk scoring.
//!
//! - [`weather`]: stateful pass over daily station data (dry-run counter)
//! - [`sensor`]: stateless per-reading score from field sensor data
//! - [`scenario`]: what-if projections derived from the weather baseline
//!
//! Every score produced here lies in `[0, 100]`, except scenario columns
//! which are only capped from above unless a symmetric clamp is requested.

pub mod scenario;
pub mod sensor;
pub mod weather;

pub use scenario::{project, ScenarioClamp};
pub use sensor::{score_sensor, sensor_score};
pub use weather::{score_weather, EngineState};

/// Lowest reportable risk.
pub const RISK_FLOOR: f64 = 0.0;

/// Highest reportable risk.
pub const RISK_CEILING: f64 = 100.0;

/// Clamp a raw formula output into `[0, 100]`.
#[inline]
pub fn clamp_risk(raw: f64) -> f64 {
    raw.clamp(RISK_FLOOR, RISK_CEILING)
}
