//! Polling engine.
//!
//! Fans one probe per registered URL out over a bounded worker pool each
//! cycle, merges outcomes under a single reader/writer lock, and publishes
//! the cycle's minimum/maximum once every worker has been joined.

mod engine;
mod state;

pub use engine::{CycleReport, Poller, PollerOptions};
pub use state::Extremes;
