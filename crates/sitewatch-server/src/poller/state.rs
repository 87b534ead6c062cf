use std::collections::HashMap;
use std::time::Duration;

use sitewatch_core::{AccessRecord, Latency, UrlRegistry};

/// Minimum/maximum over successful probes. `None` until something is measured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extremes {
    pub min: Option<AccessRecord>,
    pub max: Option<AccessRecord>,
}

impl Extremes {
    /// Strict comparisons: ties keep the current holder.
    pub fn observe(&mut self, url: &str, latency: Duration) {
        if self.min.as_ref().map_or(true, |m| latency < m.access_time) {
            self.min = Some(AccessRecord::new(url, latency));
        }
        if self.max.as_ref().map_or(true, |m| latency > m.access_time) {
            self.max = Some(AccessRecord::new(url, latency));
        }
    }
}

/// Everything guarded by the poller's lock.
#[derive(Debug, Default)]
pub(crate) struct PollState {
    pub targets: HashMap<String, Latency>,
    /// Accumulates while a cycle is running.
    pub cycle: Extremes,
    /// What readers see; replaced when a cycle completes.
    pub published: Extremes,
    pub cycles_completed: u64,
}

impl PollState {
    pub fn seeded(registry: &UrlRegistry) -> Self {
        Self {
            targets: registry
                .iter()
                .map(|url| (url.to_string(), Latency::Pending))
                .collect(),
            ..Self::default()
        }
    }
}
