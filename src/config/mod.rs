//! Sentinel Configuration Module
//!
//! Station, source paths and scenario options loaded from TOML, with
//! built-in defaults matching the Lough Ouler deployment.
//!
//! ## Loading Order
//!
//! 1. `SENTINEL_CONFIG` environment variable (path to TOML file)
//! 2. `sentinel.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! ```ignore
//! let config = SentinelConfig::load();
//! let chain = forest_sentinel::acquisition::weather_chain(&config);
//! ```

mod sentinel_config;
pub mod defaults;

pub use sentinel_config::*;
