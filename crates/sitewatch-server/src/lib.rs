//! sitewatch server library entry.
//!
//! Wires the URL registry, the HTTP prober, the polling engine, and the axum
//! query surface into one runtime. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod poller;
pub mod probe;
pub mod router;
