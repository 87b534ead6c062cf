//! Probe executor.
//!
//! A prober performs one timed request against one URL and folds every
//! transport failure into `ProbeOutcome::Failed`. The poller only talks to
//! the trait so tests can substitute simulated latencies.

mod http;

use async_trait::async_trait;
use sitewatch_core::ProbeOutcome;

pub use http::HttpProber;

#[async_trait]
pub trait Prober: Send + Sync {
    /// Never fails: errors come back as `ProbeOutcome::Failed`.
    async fn probe(&self, url: &str) -> ProbeOutcome;
}
