use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::FuturesUnordered;
use futures_util::StreamExt;
use tokio::sync::{mpsc, Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use sitewatch_core::error::{Result, SitewatchError};
use sitewatch_core::{AccessRecord, Latency, ProbeOutcome, TargetView, UrlRegistry};

use crate::config::{ExtremesPolicy, PollerSection};
use crate::obs::MonitorMetrics;
use crate::probe::Prober;

use super::state::{Extremes, PollState};

type WorkQueue = Arc<Mutex<mpsc::UnboundedReceiver<String>>>;

#[derive(Debug, Clone, Copy)]
pub struct PollerOptions {
    /// Upper bound on concurrent probes within a cycle.
    pub workers: usize,
    pub extremes: ExtremesPolicy,
}

impl Default for PollerOptions {
    fn default() -> Self {
        Self {
            workers: 16,
            extremes: ExtremesPolicy::Cycle,
        }
    }
}

impl From<&PollerSection> for PollerOptions {
    fn from(cfg: &PollerSection) -> Self {
        Self {
            workers: cfg.workers,
            extremes: cfg.extremes,
        }
    }
}

/// Summary of one completed cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub probed: usize,
    pub measured: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    measured: usize,
    failed: usize,
}

impl Tally {
    fn record(&mut self, outcome: &ProbeOutcome) {
        match outcome {
            ProbeOutcome::Measured(_) => self.measured += 1,
            ProbeOutcome::Failed(_) => self.failed += 1,
        }
    }

    fn absorb(&mut self, other: Tally) {
        self.measured += other.measured;
        self.failed += other.failed;
    }
}

/// Owns per-target latency state and the derived extremes.
///
/// Cheap to clone; clones share state. Readers only ever receive copies.
#[derive(Clone)]
pub struct Poller {
    inner: Arc<PollerInner>,
}

struct PollerInner {
    registry: UrlRegistry,
    prober: Arc<dyn Prober>,
    opts: PollerOptions,
    state: RwLock<PollState>,
    metrics: Arc<MonitorMetrics>,
}

impl Poller {
    pub fn new(
        registry: UrlRegistry,
        prober: Arc<dyn Prober>,
        opts: PollerOptions,
        metrics: Arc<MonitorMetrics>,
    ) -> Self {
        let opts = PollerOptions {
            workers: opts.workers.max(1),
            ..opts
        };
        metrics
            .targets
            .set(&[], i64::try_from(registry.len()).unwrap_or(i64::MAX));

        Self {
            inner: Arc::new(PollerInner {
                state: RwLock::new(PollState::seeded(&registry)),
                registry,
                prober,
                opts,
                metrics,
            }),
        }
    }

    /// Probe every registered URL exactly once, then publish extremes.
    ///
    /// URLs are handed out through a shared queue, so a fast worker picks up
    /// more of them. Returns after every worker has been joined.
    pub async fn run_cycle(&self) -> CycleReport {
        let started = Instant::now();

        if self.inner.opts.extremes == ExtremesPolicy::Cycle {
            self.inner.state.write().await.cycle = Extremes::default();
        }

        let (tx, rx) = mpsc::unbounded_channel::<String>();
        for url in self.inner.registry.iter() {
            // rx is held below for the whole cycle, so send cannot fail here.
            let _ = tx.send(url.to_string());
        }
        drop(tx);
        let queue: WorkQueue = Arc::new(Mutex::new(rx));

        let pool = self.inner.opts.workers.min(self.inner.registry.len());
        let mut workers = FuturesUnordered::new();
        for id in 0..pool {
            let poller = self.clone();
            let queue = Arc::clone(&queue);
            workers.push(tokio::spawn(async move { poller.worker(id, queue).await }));
        }

        let mut tally = Tally::default();
        while let Some(joined) = workers.next().await {
            match joined {
                Ok(t) => tally.absorb(t),
                Err(e) => tracing::error!(error = %e, "probe worker aborted"),
            }
        }

        let published = {
            let mut st = self.inner.state.write().await;
            st.published = st.cycle.clone();
            st.cycles_completed += 1;
            st.published.clone()
        };

        let elapsed = started.elapsed();
        self.inner.metrics.cycles.inc(&[]);
        self.inner.metrics.cycle_duration.observe(&[], elapsed);

        let report = CycleReport {
            probed: tally.measured + tally.failed,
            measured: tally.measured,
            failed: tally.failed,
            elapsed,
        };
        tracing::info!(
            probed = report.probed,
            measured = report.measured,
            failed = report.failed,
            elapsed_ms = elapsed.as_millis() as u64,
            min = ?published.min.as_ref().map(|r| r.url.as_str()),
            max = ?published.max.as_ref().map(|r| r.url.as_str()),
            "cycle completed"
        );
        report
    }

    async fn worker(self, id: usize, queue: WorkQueue) -> Tally {
        let mut tally = Tally::default();
        loop {
            let next = queue.lock().await.recv().await;
            let Some(url) = next else { break };

            let outcome = self.inner.prober.probe(&url).await;
            tally.record(&outcome);
            self.merge_result(&url, outcome).await;
        }
        tracing::debug!(
            worker = id,
            measured = tally.measured,
            failed = tally.failed,
            "probe worker drained"
        );
        tally
    }

    /// Record one probe outcome. Returns false for unregistered URLs.
    ///
    /// Failures replace the target's latency but never touch the extremes.
    /// Extremes become visible to readers when the running cycle completes.
    pub async fn merge_result(&self, url: &str, outcome: ProbeOutcome) -> bool {
        match &outcome {
            ProbeOutcome::Measured(d) => {
                self.inner.metrics.probes.inc(&[("outcome", "measured")]);
                self.inner.metrics.probe_latency.observe(&[], *d);
            }
            ProbeOutcome::Failed(_) => {
                self.inner.metrics.probes.inc(&[("outcome", "failed")]);
            }
        }

        let mut guard = self.inner.state.write().await;
        let st = &mut *guard;
        let Some(slot) = st.targets.get_mut(url) else {
            tracing::warn!(%url, "probe result for unregistered url ignored");
            return false;
        };
        if let Some(d) = outcome.latency() {
            st.cycle.observe(url, d);
        }
        *slot = Latency::from(outcome);
        true
    }

    /// Latest successful measurement for `url`.
    ///
    /// `NotFound` for URLs that were never registered, `NotMeasured` for
    /// registered URLs that are still pending or whose last probe failed.
    pub async fn get_latency(&self, url: &str) -> Result<AccessRecord> {
        let st = self.inner.state.read().await;
        match st.targets.get(url) {
            None => Err(SitewatchError::NotFound(url.to_string())),
            Some(Latency::Measured(d)) => Ok(AccessRecord::new(url, *d)),
            Some(_) => Err(SitewatchError::NotMeasured(url.to_string())),
        }
    }

    pub async fn get_minimum(&self) -> Option<AccessRecord> {
        self.inner.state.read().await.published.min.clone()
    }

    pub async fn get_maximum(&self) -> Option<AccessRecord> {
        self.inner.state.read().await.published.max.clone()
    }

    /// Every registered target in registry order.
    pub async fn targets(&self) -> Vec<TargetView> {
        let st = self.inner.state.read().await;
        self.inner
            .registry
            .iter()
            .map(|url| {
                let latency = st.targets.get(url).cloned().unwrap_or_default();
                TargetView::new(url, &latency)
            })
            .collect()
    }

    pub async fn cycles_completed(&self) -> u64 {
        self.inner.state.read().await.cycles_completed
    }

    /// Run cycles back to back with `interval` of sleep in between until
    /// `shutdown` resolves. A running cycle is always finished first.
    pub async fn run_until<F>(&self, interval: Duration, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        tracing::info!(
            targets = self.inner.registry.len(),
            workers = self.inner.opts.workers,
            interval_ms = interval.as_millis() as u64,
            "poller started"
        );

        loop {
            let report = self.run_cycle().await;
            if report.elapsed > interval {
                tracing::warn!(
                    elapsed_ms = report.elapsed.as_millis() as u64,
                    interval_ms = interval.as_millis() as u64,
                    "cycle took longer than the polling interval"
                );
            }
            tokio::select! {
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }

        tracing::info!("poller stopped");
    }

    pub async fn run_forever(&self, interval: Duration) {
        self.run_until(interval, std::future::pending::<()>()).await
    }

    /// Spawn `run_until` in the background.
    pub fn start<F>(&self, interval: Duration, shutdown: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let poller = self.clone();
        tokio::spawn(async move { poller.run_until(interval, shutdown).await })
    }
}
