//! Forest Sentinel - fire risk command console
//!
//! One-shot commands over station weather and field sensor data.
//!
//! # Usage
//!
//! ```bash
//! # Score the micro:bit field log
//! forest-sentinel sensor
//!
//! # Score the last 30 days of station weather (live, falling back to backup)
//! forest-sentinel weather
//!
//! # Baseline plus +2C and drought projections, as JSON
//! forest-sentinel scenarios --json
//!
//! # Write the daily report
//! forest-sentinel report --out DAILY_FOREST_REPORT.txt
//! ```
//!
//! # Environment Variables
//!
//! - `SENTINEL_CONFIG`: Path to a TOML config file (default: ./sentinel.toml)
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

use forest_sentinel::acquisition::{weather_chain, FieldSensorSource};
use forest_sentinel::engine::{project, score_sensor, score_weather, ScenarioClamp};
use forest_sentinel::report::{summarize, DailyReport};
use forest_sentinel::types::{RiskRow, ScenarioRow, SensorObservation, WeatherObservation};
use forest_sentinel::SentinelConfig;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "forest-sentinel")]
#[command(about = "Forest Sentinel Fire Risk Command Console")]
#[command(version)]
struct CliArgs {
    /// Path to a TOML config file (overrides SENTINEL_CONFIG and ./sentinel.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: SubCommand,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Load and score micro:bit field data
    Sensor {
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the fire risk model on station weather
    Weather {
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Weather risk plus what-if disaster scenarios
    Scenarios {
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the daily safety report
    Report {
        /// Output file (default: report.output_path from config)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Print the effective configuration as TOML
    Config,
}

// ============================================================================
// Commands
// ============================================================================

async fn run_sensor(config: &SentinelConfig, json: bool) -> Result<()> {
    let resolution = FieldSensorSource::from_config(&config.sources).resolve().await;
    if resolution.is_empty() {
        warn!("No field sensor data to process");
        return Ok(());
    }

    let rows = score_sensor(&resolution.series);
    if json {
        print_json(&rows)?;
    } else {
        rows.iter().for_each(print_sensor_row);
    }
    Ok(())
}

/// Resolve and score station weather; `None` when no tier produced data.
async fn scored_weather(config: &SentinelConfig) -> Option<Vec<RiskRow<WeatherObservation>>> {
    let resolution = weather_chain(config).resolve().await;
    if resolution.is_empty() {
        warn!("No weather data to process");
        return None;
    }
    if resolution.is_degraded() {
        warn!(source = ?resolution.source, "Using fallback weather data");
    }
    Some(score_weather(&resolution.series))
}

async fn run_weather(config: &SentinelConfig, json: bool) -> Result<()> {
    let Some(rows) = scored_weather(config).await else {
        return Ok(());
    };
    if json {
        print_json(&rows)?;
    } else {
        rows.iter().for_each(print_weather_row);
    }
    Ok(())
}

async fn run_scenarios(config: &SentinelConfig, json: bool) -> Result<()> {
    let Some(rows) = scored_weather(config).await else {
        return Ok(());
    };
    let clamp = ScenarioClamp::from_symmetric_flag(config.scenario.symmetric_clamp);
    let projected = project(&rows, clamp);
    if json {
        print_json(&projected)?;
    } else {
        projected.iter().for_each(print_scenario_row);
    }
    Ok(())
}

async fn run_report(config: &SentinelConfig, out: Option<PathBuf>) -> Result<()> {
    let Some(rows) = scored_weather(config).await else {
        println!("No data to report on.");
        return Ok(());
    };
    let Some(summary) = summarize(&rows) else {
        println!("No data to report on.");
        return Ok(());
    };

    let report = DailyReport::new(&config.station.name, &config.station.id, summary);
    let path = out.unwrap_or_else(|| config.report.output_path.clone());
    std::fs::write(&path, report.render())
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!(
        path = %path.display(),
        average_risk = summary.average_risk,
        status = %summary.status,
        "Report generated"
    );
    println!("Report exported to {}", path.display());
    Ok(())
}

// ============================================================================
// Output
// ============================================================================

fn print_json<T: Serialize>(rows: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(rows).context("Failed to serialize rows")?;
    println!("{text}");
    Ok(())
}

fn print_sensor_row(row: &RiskRow<SensorObservation>) {
    let obs = &row.observation;
    println!(
        "t {:>6}  light {:>3}  temp {:>5.1}  risk {:>5.1}",
        obs.time_index, obs.light_level, obs.temperature, row.risk_score
    );
}

fn print_weather_row(row: &RiskRow<WeatherObservation>) {
    let obs = &row.observation;
    println!(
        "{:>12}  maxtp {:>5.1}  rain {:>5.1}  risk {:>5.1}",
        obs.date_label, obs.max_temperature, obs.rainfall_mm, row.risk_score
    );
}

fn print_scenario_row(row: &ScenarioRow) {
    let obs = &row.baseline.observation;
    println!(
        "{:>12}  actual {:>5.1}  +2C {:>5.1}  drought {:>5.1}",
        obs.date_label, row.baseline.risk_score, row.risk_climate, row.risk_drought
    );
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => SentinelConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SentinelConfig::load(),
    };

    match args.command {
        SubCommand::Sensor { json } => run_sensor(&config, json).await,
        SubCommand::Weather { json } => run_weather(&config, json).await,
        SubCommand::Scenarios { json } => run_scenarios(&config, json).await,
        SubCommand::Report { out } => run_report(&config, out).await,
        SubCommand::Config => {
            print!("{}", config.to_toml().context("Failed to serialize config")?);
            Ok(())
        }
    }
}
