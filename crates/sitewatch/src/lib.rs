//! Top-level facade crate for sitewatch.
//!
//! Re-exports the core model and the server runtime so users can depend on a single crate.

pub mod core {
    pub use sitewatch_core::*;
}

pub mod server {
    pub use sitewatch_server::*;
}
