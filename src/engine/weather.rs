//! Weather-path scoring
//!
//! Fire risk from daily maximum temperature and rainfall. A dry-run counter
//! accumulates over consecutive dry, warm days; meaningful rain resets it and
//! drizzle wears it down by one.
//!
//! # Scoring Algorithm
//!
//! Per row, in order:
//! - rain > 1.0 mm: counter = 0, penalty -20
//! - rain > 0.1 mm: counter = max(counter - 1, 0), penalty -10
//! - otherwise: counter += 1 if max temperature > 12 °C, penalty 0
//!
//! `score = max_temperature * 2.5 + counter * 8 + penalty`, clamped to `[0, 100]`.

use super::clamp_risk;
use crate::config::defaults::RECENCY_WINDOW;
use crate::types::{ObservationSeries, RiskRow, WeatherObservation};

/// Rainfall above which the dry run is broken outright (mm).
const SOAKING_RAIN_MM: f64 = 1.0;
/// Rainfall above which the day counts as drizzle rather than dry (mm).
const DRIZZLE_MM: f64 = 0.1;
/// Maximum temperature above which a dry day extends the run (°C).
const WARM_DAY_C: f64 = 12.0;

const TEMPERATURE_WEIGHT: f64 = 2.5;
const DRY_RUN_WEIGHT: f64 = 8.0;
const SOAKING_RAIN_PENALTY: f64 = -20.0;
const DRIZZLE_PENALTY: f64 = -10.0;

/// State carried across rows of one scoring pass.
///
/// Created fresh for every pass and dropped when the pass ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineState {
    dry_run_length: u32,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consecutive dry, warm days counted so far.
    pub fn dry_run_length(&self) -> u32 {
        self.dry_run_length
    }

    /// Advance the counter by one observation and return its clamped score.
    pub fn step(&mut self, obs: &WeatherObservation) -> f64 {
        let penalty = if obs.rainfall_mm > SOAKING_RAIN_MM {
            self.dry_run_length = 0;
            SOAKING_RAIN_PENALTY
        } else if obs.rainfall_mm > DRIZZLE_MM {
            self.dry_run_length = self.dry_run_length.saturating_sub(1);
            DRIZZLE_PENALTY
        } else {
            if obs.max_temperature > WARM_DAY_C {
                self.dry_run_length += 1;
            }
            0.0
        };

        let raw = obs.max_temperature * TEMPERATURE_WEIGHT
            + f64::from(self.dry_run_length) * DRY_RUN_WEIGHT
            + penalty;
        clamp_risk(raw)
    }
}

/// Score the most recent [`RECENCY_WINDOW`] observations, oldest first.
///
/// Older rows are discarded before scoring and do not influence the counter.
pub fn score_weather(
    series: &ObservationSeries<WeatherObservation>,
) -> Vec<RiskRow<WeatherObservation>> {
    series
        .recent(RECENCY_WINDOW)
        .iter()
        .scan(EngineState::new(), |state, obs| {
            let risk_score = state.step(obs);
            Some(RiskRow {
                observation: obs.clone(),
                risk_score,
            })
        })
        .collect()
}
