use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use sitewatch_core::error::{Result, SitewatchError};
use sitewatch_core::ProbeOutcome;

use super::Prober;

const USER_AGENT: &str = concat!("sitewatch/", env!("CARGO_PKG_VERSION"));

/// Timed `GET` over a shared reqwest client.
///
/// Elapsed time runs from request start until response headers arrive; the
/// body is never read. Any HTTP status counts as a measurement.
#[derive(Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    /// `timeout` of `None` keeps the client's default (no overall timeout).
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| SitewatchError::Internal(format!("http client build failed: {e}")))?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        let start = Instant::now();
        match self.client.get(url).send().await {
            Ok(resp) => {
                let elapsed = start.elapsed();
                tracing::info!(
                    %url,
                    status = resp.status().as_u16(),
                    latency_ms = elapsed.as_millis() as u64,
                    "probe succeeded"
                );
                ProbeOutcome::Measured(elapsed)
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "probe failed");
                ProbeOutcome::Failed(e.to_string())
            }
        }
    }
}
