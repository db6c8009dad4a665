//! Risk score types

use serde::{Deserialize, Serialize};

use super::WeatherObservation;

/// An observation augmented with its bounded risk score.
///
/// `risk_score` is always within `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRow<T> {
    #[serde(flatten)]
    pub observation: T,
    pub risk_score: f64,
}

/// A weather risk row plus the what-if projections derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    #[serde(flatten)]
    pub baseline: RiskRow<WeatherObservation>,
    /// Approximate +2°C warming shift
    pub risk_climate: f64,
    /// "No rain occurred" projection
    pub risk_drought: f64,
}

/// Overall fire danger classification of a scored series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskStatus {
    Low = 0,
    Moderate = 1,
    Critical = 2,
}

impl RiskStatus {
    /// Classify an average risk score.
    ///
    /// LOW below 40, MODERATE for 40..=70, CRITICAL strictly above 70.
    pub fn from_average(average: f64) -> Self {
        if average > 70.0 {
            RiskStatus::Critical
        } else if average >= 40.0 {
            RiskStatus::Moderate
        } else {
            RiskStatus::Low
        }
    }
}

impl std::fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskStatus::Low => write!(f, "LOW"),
            RiskStatus::Moderate => write!(f, "MODERATE"),
            RiskStatus::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl Default for RiskStatus {
    fn default() -> Self {
        RiskStatus::Low
    }
}
