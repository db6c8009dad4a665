//! Weather station tiers
//!
//! Live download from the Met Éireann climate data service, with a local copy
//! of the same export as failsafe. Both tiers share the table parser, so the
//! fallback is invisible to the scoring stages.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use super::station_table::parse_station_table;
use super::{read_local, AcquisitionError, FallbackChain, SeriesResolver};
use crate::config::SentinelConfig;
use crate::types::{ObservationSeries, WeatherObservation};

/// Build the standard two-tier weather chain: live station, then local backup.
pub fn weather_chain(config: &SentinelConfig) -> FallbackChain<WeatherObservation> {
    FallbackChain::new()
        .with_tier(RemoteStation::new(
            config.station.url(),
            config.sources.fetch_timeout(),
        ))
        .with_tier(LocalBackup::new(&config.sources.backup_path))
}

// ============================================================================
// Live download
// ============================================================================

/// Downloads the daily export over HTTP with a bounded timeout.
///
/// Any failure (transport, timeout, non-2xx status, unparseable body) is
/// returned as a tier failure. There is no retry.
#[derive(Debug, Clone)]
pub struct RemoteStation {
    url: String,
    timeout: Duration,
}

impl RemoteStation {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the export body as text.
    async fn fetch_text(&self) -> Result<String, AcquisitionError> {
        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        let resp = http.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AcquisitionError::Status(status));
        }

        let body = resp.text().await?;
        debug!(bytes = body.len(), "Station export downloaded");
        Ok(body)
    }
}

#[async_trait]
impl SeriesResolver<WeatherObservation> for RemoteStation {
    async fn resolve(&self) -> Result<ObservationSeries<WeatherObservation>, AcquisitionError> {
        info!(
            url = %self.url,
            timeout_secs = self.timeout.as_secs(),
            "Connecting to weather station"
        );
        let body = self.fetch_text().await?;
        let series = parse_station_table(&body)?;
        info!(rows = series.len(), "Live station data received");
        Ok(series)
    }

    fn tier_name(&self) -> &str {
        "live-station"
    }
}

// ============================================================================
// Local backup
// ============================================================================

/// Reads a previously saved copy of the station export from disk.
#[derive(Debug, Clone)]
pub struct LocalBackup {
    path: PathBuf,
}

impl LocalBackup {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SeriesResolver<WeatherObservation> for LocalBackup {
    async fn resolve(&self) -> Result<ObservationSeries<WeatherObservation>, AcquisitionError> {
        info!(path = %self.path.display(), "Loading local weather backup");
        let text = read_local(&self.path).await?;
        parse_station_table(&text)
    }

    fn tier_name(&self) -> &str {
        "local-backup"
    }
}
