//! sitewatch core: data model, URL registry, and the shared error surface.
//!
//! This crate holds everything the polling runtime and the HTTP layer agree
//! on. It carries no async runtime or transport dependencies so the loader and
//! model can be reused from tests and tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed input surfaces as `SitewatchError` or is skipped and logged.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod registry;

/// Shared result type.
pub use error::{Result, SitewatchError};
pub use model::{AccessRecord, Latency, ProbeOutcome, TargetStatus, TargetView};
pub use registry::UrlRegistry;
