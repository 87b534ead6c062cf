//! Lightweight in-process metrics.
//!
//! Probe and cycle counters are stored as atomics and rendered by the
//! `/metrics` handler in Prometheus text format.

pub mod metrics;

pub use metrics::MonitorMetrics;
