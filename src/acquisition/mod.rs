//! Observation data acquisition module
//!
//! Resolves observation series from tiered sources. Every source is a
//! [`SeriesResolver`]; a [`FallbackChain`] tries its resolvers in order and
//! returns the first series produced, recording every tier failure on the way.
//! Resolution never fails: when no tier produces data the result is an empty
//! series, which callers treat as "nothing to process".

pub mod field_sensor;
pub mod station;
pub mod station_table;

pub use field_sensor::{parse_sensor_log, FieldSensorSource, SensorLog};
pub use station::{weather_chain, LocalBackup, RemoteStation};
pub use station_table::parse_station_table;

use crate::types::ObservationSeries;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors raised by a single source tier.
///
/// These never escape [`FallbackChain::resolve`]; they are collected in
/// [`Resolution::failures`].
#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("resource not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error reading {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("expected {expected} preamble lines, found {found}")]
    Preamble { expected: usize, found: usize },

    #[error("missing column '{0}'")]
    MissingColumn(&'static str),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
}

impl AcquisitionError {
    /// True when the resource simply does not exist, as opposed to existing
    /// but being unreachable or corrupt.
    pub fn is_absent(&self) -> bool {
        matches!(self, AcquisitionError::NotFound(_))
    }

    /// True when the content was obtained but could not be parsed.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            AcquisitionError::Preamble { .. }
                | AcquisitionError::MissingColumn(_)
                | AcquisitionError::Csv(_)
                | AcquisitionError::MalformedRow { .. }
        )
    }
}

/// One candidate source tier.
#[async_trait]
pub trait SeriesResolver<T: Send>: Send + Sync {
    /// Produce the full series from this tier, or the reason it could not.
    async fn resolve(&self) -> Result<ObservationSeries<T>, AcquisitionError>;

    /// Short name for logging (e.g. "live-station", "local-backup").
    fn tier_name(&self) -> &str;
}

/// A tier that failed during resolution.
#[derive(Debug)]
pub struct TierFailure {
    pub tier: String,
    pub error: AcquisitionError,
}

/// Outcome of resolving a [`FallbackChain`].
#[derive(Debug)]
pub struct Resolution<T> {
    /// Resolved series; empty when no tier produced data.
    pub series: ObservationSeries<T>,
    /// Name of the tier that produced `series`.
    pub source: Option<String>,
    /// Tiers that failed before `source`, in the order they were tried.
    pub failures: Vec<TierFailure>,
}

impl<T> Resolution<T> {
    /// No data available; downstream stages should be skipped.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Data came from a fallback tier after at least one failure.
    pub fn is_degraded(&self) -> bool {
        self.source.is_some() && !self.failures.is_empty()
    }

    /// Some tier had content that could not be parsed.
    pub fn is_corrupt(&self) -> bool {
        self.failures.iter().any(|f| f.error.is_malformed())
    }

    pub fn into_series(self) -> ObservationSeries<T> {
        self.series
    }
}

/// Ordered list of candidate resolvers, tried first to last.
pub struct FallbackChain<T: Send> {
    tiers: Vec<Box<dyn SeriesResolver<T>>>,
}

impl<T: Send + 'static> FallbackChain<T> {
    pub fn new() -> Self {
        Self { tiers: Vec::new() }
    }

    /// Append a tier behind the existing ones.
    pub fn with_tier(mut self, tier: impl SeriesResolver<T> + 'static) -> Self {
        self.tiers.push(Box::new(tier));
        self
    }

    pub fn tier_names(&self) -> Vec<&str> {
        self.tiers.iter().map(|t| t.tier_name()).collect()
    }

    /// Try each tier in order and return the first series produced.
    ///
    /// A tier that succeeds with zero rows still ends the search.
    pub async fn resolve(&self) -> Resolution<T> {
        let mut failures = Vec::new();

        for (idx, tier) in self.tiers.iter().enumerate() {
            let name = tier.tier_name();
            match tier.resolve().await {
                Ok(series) => {
                    if failures.is_empty() {
                        info!(tier = name, rows = series.len(), "Source resolved");
                    } else {
                        warn!(
                            tier = name,
                            rows = series.len(),
                            failed_tiers = failures.len(),
                            "Source resolved from fallback tier"
                        );
                    }
                    return Resolution {
                        series,
                        source: Some(name.to_string()),
                        failures,
                    };
                }
                Err(e) => {
                    if idx + 1 < self.tiers.len() {
                        warn!(tier = name, error = %e, "Source tier failed, trying next tier");
                    } else {
                        error!(tier = name, error = %e, "Last source tier failed");
                    }
                    failures.push(TierFailure {
                        tier: name.to_string(),
                        error: e,
                    });
                }
            }
        }

        error!(tiers = self.tiers.len(), "No source tier produced data");
        Resolution {
            series: ObservationSeries::empty(),
            source: None,
            failures,
        }
    }
}

impl<T: Send + 'static> Default for FallbackChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a local text resource, mapping a missing file to
/// [`AcquisitionError::NotFound`].
///
/// Invalid UTF-8 is replaced rather than rejected, matching how the live
/// download decodes its body. Bad bytes in a data field then surface as a
/// parse failure instead of an I/O one.
pub(crate) async fn read_local(path: &Path) -> Result<String, AcquisitionError> {
    debug!(path = %path.display(), "Reading local source");
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AcquisitionError::NotFound(path.to_path_buf())
        } else {
            AcquisitionError::Io(path.to_path_buf(), e)
        }
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
