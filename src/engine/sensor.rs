//! Sensor-path scoring
//!
//! Instant, per-reading risk from the field unit: no state across readings.
//! `score = temperature * 2 + light_level / 5`, clamped to `[0, 100]`.

use super::clamp_risk;
use crate::types::{ObservationSeries, RiskRow, SensorObservation};

const TEMPERATURE_WEIGHT: f64 = 2.0;
/// Normalisation divisor for the raw 0-255 light scale.
const LIGHT_DIVISOR: f64 = 5.0;

/// Risk for a single reading.
pub fn sensor_score(obs: &SensorObservation) -> f64 {
    clamp_risk(obs.temperature * TEMPERATURE_WEIGHT + f64::from(obs.light_level) / LIGHT_DIVISOR)
}

/// Score every reading in arrival order.
pub fn score_sensor(
    series: &ObservationSeries<SensorObservation>,
) -> Vec<RiskRow<SensorObservation>> {
    series
        .iter()
        .map(|obs| RiskRow {
            observation: *obs,
            risk_score: sensor_score(obs),
        })
        .collect()
}
