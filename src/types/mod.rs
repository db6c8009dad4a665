//! Shared data structures for the fire risk pipeline
//!
//! This module defines the core types that flow between stages:
//! - Acquisition: WeatherObservation / SensorObservation inside an ObservationSeries
//! - Scoring: RiskRow (observation + bounded risk score)
//! - Scenarios: ScenarioRow (baseline + climate-shift / drought projections)
//! - Reporting: RiskStatus classification

mod observation;
mod risk;

pub use observation::*;
pub use risk::*;
