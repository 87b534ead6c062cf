//! Shared application state for the sitewatch server.

use std::sync::Arc;

use sitewatch_core::error::Result;
use sitewatch_core::UrlRegistry;

use crate::config::SitewatchConfig;
use crate::obs::MonitorMetrics;
use crate::poller::{Poller, PollerOptions};
use crate::probe::HttpProber;

#[derive(Clone)]
pub struct AppState {
    poller: Poller,
    metrics: Arc<MonitorMetrics>,
}

impl AppState {
    pub fn new(poller: Poller, metrics: Arc<MonitorMetrics>) -> Self {
        Self { poller, metrics }
    }

    /// Load the URL list and build the HTTP-backed poller described by `cfg`.
    /// An unreadable URL list is returned as an error so startup can abort.
    pub fn build(cfg: &SitewatchConfig) -> Result<Self> {
        let registry = UrlRegistry::load_from_file(&cfg.poller.url_file)?;
        tracing::info!(
            file = %cfg.poller.url_file,
            targets = registry.len(),
            "url registry loaded"
        );

        let prober = HttpProber::new(cfg.poller.probe_timeout())?;
        let metrics = Arc::new(MonitorMetrics::default());
        let poller = Poller::new(
            registry,
            Arc::new(prober),
            PollerOptions::from(&cfg.poller),
            Arc::clone(&metrics),
        );
        Ok(Self::new(poller, metrics))
    }

    pub fn poller(&self) -> &Poller {
        &self.poller
    }

    pub fn metrics(&self) -> Arc<MonitorMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }
}
