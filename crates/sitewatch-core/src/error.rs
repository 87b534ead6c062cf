//! Shared error type across sitewatch crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// URL list could not be read.
    LoadFailed,
    /// URL is not registered.
    NotFound,
    /// URL is registered but has no successful measurement.
    NotMeasured,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::LoadFailed => "LOAD_FAILED",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::NotMeasured => "NOT_MEASURED",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SitewatchError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum SitewatchError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("load failed: {0}")]
    Load(String),
    #[error("website not found: {0}")]
    NotFound(String),
    #[error("website not measured: {0}")]
    NotMeasured(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SitewatchError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SitewatchError::BadRequest(_) => ClientCode::BadRequest,
            SitewatchError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            SitewatchError::Load(_) => ClientCode::LoadFailed,
            SitewatchError::NotFound(_) => ClientCode::NotFound,
            SitewatchError::NotMeasured(_) => ClientCode::NotMeasured,
            SitewatchError::Internal(_) => ClientCode::Internal,
        }
    }
}
