use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use sitewatch_core::error::{Result, SitewatchError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SitewatchConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub poller: PollerSection,
}

impl Default for SitewatchConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            poller: PollerSection::default(),
        }
    }
}

impl SitewatchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SitewatchError::UnsupportedVersion);
        }
        self.server.validate()?;
        self.poller.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            SitewatchError::BadRequest(format!(
                "server.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }
}

/// Whether Minimum/Maximum describe the last cycle or the whole process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtremesPolicy {
    /// Both extremes reset at the start of every cycle.
    #[default]
    Cycle,
    /// Neither extreme is ever reset.
    AllTime,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PollerSection {
    #[serde(default = "default_url_file")]
    pub url_file: String,

    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    #[serde(default = "default_workers")]
    pub workers: usize,

    /// None => rely on the HTTP client's defaults.
    #[serde(default)]
    pub probe_timeout_ms: Option<u64>,

    #[serde(default)]
    pub extremes: ExtremesPolicy,
}

impl Default for PollerSection {
    fn default() -> Self {
        Self {
            url_file: default_url_file(),
            interval_ms: default_interval_ms(),
            workers: default_workers(),
            probe_timeout_ms: None,
            extremes: ExtremesPolicy::default(),
        }
    }
}

impl PollerSection {
    pub fn validate(&self) -> Result<()> {
        if self.url_file.trim().is_empty() {
            return Err(SitewatchError::BadRequest(
                "poller.url_file must not be empty".into(),
            ));
        }
        if !(1_000..=86_400_000).contains(&self.interval_ms) {
            return Err(SitewatchError::BadRequest(
                "poller.interval_ms must be between 1000 and 86400000".into(),
            ));
        }
        if !(1..=1024).contains(&self.workers) {
            return Err(SitewatchError::BadRequest(
                "poller.workers must be between 1 and 1024".into(),
            ));
        }
        if let Some(ms) = self.probe_timeout_ms {
            if !(1..=600_000).contains(&ms) {
                return Err(SitewatchError::BadRequest(
                    "poller.probe_timeout_ms must be between 1 and 600000".into(),
                ));
            }
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn probe_timeout(&self) -> Option<Duration> {
        self.probe_timeout_ms.map(Duration::from_millis)
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}
fn default_url_file() -> String {
    "url.txt".into()
}
fn default_interval_ms() -> u64 {
    60_000
}
fn default_workers() -> usize {
    16
}
