//! Read-only query surface.
//!
//! - `/`              : status banner
//! - `/access/{url}`  : latest latency of `http://{url}`
//! - `/min`, `/max`   : extremes of the last completed cycle
//! - `/targets`       : every registered target with its status

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::{access_time, index, max_access_time, min_access_time, targets};
