//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use sitewatch_core::error::{Result, SitewatchError};

pub use schema::{ExtremesPolicy, PollerSection, ServerSection, SitewatchConfig};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<SitewatchConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        SitewatchError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<SitewatchConfig> {
    let cfg: SitewatchConfig = serde_yaml::from_str(s)
        .map_err(|e| SitewatchError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
