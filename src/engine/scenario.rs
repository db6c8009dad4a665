//! Scenario Projector
//!
//! What-if columns derived from a scored weather series:
//! - climate: `risk_score + max_temperature * 0.5`, an additive stand-in for a
//!   +2 °C shift (the engine is not re-run with warmer temperatures)
//! - drought: `risk_score + 20`, as if no rain had fallen
//!
//! Both are capped at 100. The floor is only applied with
//! [`ScenarioClamp::Symmetric`].

use serde::{Deserialize, Serialize};

use super::{clamp_risk, RISK_CEILING};
use crate::types::{RiskRow, ScenarioRow, WeatherObservation};

const CLIMATE_TEMPERATURE_FACTOR: f64 = 0.5;
const DROUGHT_BONUS: f64 = 20.0;

/// How scenario columns are bounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioClamp {
    /// Cap at 100 only
    #[default]
    UpperOnly,
    /// Cap at 100 and floor at 0
    Symmetric,
}

impl ScenarioClamp {
    pub fn from_symmetric_flag(symmetric: bool) -> Self {
        if symmetric {
            ScenarioClamp::Symmetric
        } else {
            ScenarioClamp::UpperOnly
        }
    }

    fn apply(self, raw: f64) -> f64 {
        match self {
            ScenarioClamp::UpperOnly => raw.min(RISK_CEILING),
            ScenarioClamp::Symmetric => clamp_risk(raw),
        }
    }
}

/// Derive scenario columns for each baseline row. Rows are independent.
pub fn project(rows: &[RiskRow<WeatherObservation>], clamp: ScenarioClamp) -> Vec<ScenarioRow> {
    rows.iter()
        .map(|row| {
            let climate =
                row.risk_score + row.observation.max_temperature * CLIMATE_TEMPERATURE_FACTOR;
            let drought = row.risk_score + DROUGHT_BONUS;
            ScenarioRow {
                baseline: row.clone(),
                risk_climate: clamp.apply(climate),
                risk_drought: clamp.apply(drought),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(max_temperature: f64, risk_score: f64) -> RiskRow<WeatherObservation> {
        RiskRow {
            observation: WeatherObservation::new(max_temperature, 0.0),
            risk_score,
        }
    }

    #[test]
    fn test_projection_values() {
        let out = project(&[row(20.0, 50.0)], ScenarioClamp::UpperOnly);
        assert_eq!(out[0].risk_climate, 60.0);
        assert_eq!(out[0].risk_drought, 70.0);
        assert_eq!(out[0].baseline.risk_score, 50.0);
    }

    #[test]
    fn test_projection_caps_at_ceiling() {
        let out = project(&[row(30.0, 90.0)], ScenarioClamp::UpperOnly);
        assert_eq!(out[0].risk_climate, 100.0);
        assert_eq!(out[0].risk_drought, 100.0);
    }

    #[test]
    fn test_upper_only_leaves_negative_climate() {
        // frost day with zero baseline
        let out = project(&[row(-6.0, 0.0)], ScenarioClamp::UpperOnly);
        assert_eq!(out[0].risk_climate, -3.0);
    }

    #[test]
    fn test_symmetric_floors_climate() {
        let out = project(&[row(-6.0, 0.0)], ScenarioClamp::Symmetric);
        assert_eq!(out[0].risk_climate, 0.0);
        assert_eq!(out[0].risk_drought, 20.0);
    }

    #[test]
    fn test_flag_mapping() {
        assert_eq!(ScenarioClamp::from_symmetric_flag(false), ScenarioClamp::UpperOnly);
        assert_eq!(ScenarioClamp::from_symmetric_flag(true), ScenarioClamp::Symmetric);
    }
}
