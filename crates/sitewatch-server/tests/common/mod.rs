//! Scripted prober shared by engine and API tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use sitewatch_core::{ProbeOutcome, UrlRegistry};
use sitewatch_server::obs::MonitorMetrics;
use sitewatch_server::poller::{Poller, PollerOptions};
use sitewatch_server::probe::Prober;

/// Returns preset outcomes, optionally after a simulated delay, and tracks
/// how many probes are in flight at once.
#[derive(Default)]
pub struct ScriptedProber {
    script: Mutex<HashMap<String, ProbeOutcome>>,
    delay: Mutex<Duration>,
    calls: Mutex<HashMap<String, usize>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl ScriptedProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(self, url: &str, millis: u64) -> Self {
        self.set(url, ProbeOutcome::Measured(Duration::from_millis(millis)));
        self
    }

    pub fn fail(self, url: &str) -> Self {
        self.set(url, ProbeOutcome::Failed("connection refused".into()));
        self
    }

    pub fn set(&self, url: &str, outcome: ProbeOutcome) {
        self.script.lock().unwrap().insert(url.to_string(), outcome);
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }

    pub fn calls(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prober for ScriptedProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        *self.calls.lock().unwrap().entry(url.to_string()).or_insert(0) += 1;

        let delay = *self.delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let outcome = self
            .script
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| ProbeOutcome::Failed("no script".into()));
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        outcome
    }
}

pub fn registry(urls: &[&str]) -> UrlRegistry {
    urls.iter().map(|u| u.to_string()).collect()
}

pub fn poller(
    urls: &[&str],
    prober: Arc<ScriptedProber>,
    opts: PollerOptions,
) -> (Poller, Arc<MonitorMetrics>) {
    let metrics = Arc::new(MonitorMetrics::default());
    let poller = Poller::new(registry(urls), prober, opts, Arc::clone(&metrics));
    (poller, metrics)
}
