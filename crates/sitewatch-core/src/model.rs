//! Monitoring data model.
//!
//! `accessTime` travels on the wire as integer nanoseconds so the JSON shape
//! stays compatible with existing dashboard consumers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Result of a single probe, as reported by a prober.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Response headers arrived after the given elapsed time.
    Measured(Duration),
    /// Transport-level failure (connect, DNS, TLS, timeout).
    Failed(String),
}

impl ProbeOutcome {
    pub fn latency(&self) -> Option<Duration> {
        match self {
            ProbeOutcome::Measured(d) => Some(*d),
            ProbeOutcome::Failed(_) => None,
        }
    }
}

/// Last observed latency state of a registered target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Latency {
    /// Registered, no probe has finished yet.
    #[default]
    Pending,
    Measured(Duration),
    /// Most recent probe failed; carries the transport error.
    Failed(String),
}

impl Latency {
    pub fn measured(&self) -> Option<Duration> {
        match self {
            Latency::Measured(d) => Some(*d),
            _ => None,
        }
    }

    pub fn status(&self) -> TargetStatus {
        match self {
            Latency::Pending => TargetStatus::Pending,
            Latency::Measured(_) => TargetStatus::Up,
            Latency::Failed(_) => TargetStatus::Down,
        }
    }
}

impl From<ProbeOutcome> for Latency {
    fn from(outcome: ProbeOutcome) -> Self {
        match outcome {
            ProbeOutcome::Measured(d) => Latency::Measured(d),
            ProbeOutcome::Failed(reason) => Latency::Failed(reason),
        }
    }
}

/// `{url, accessTime}` pair: one target's latency, or an extreme record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    pub url: String,
    #[serde(rename = "accessTime", with = "duration_nanos")]
    pub access_time: Duration,
}

impl AccessRecord {
    pub fn new(url: impl Into<String>, access_time: Duration) -> Self {
        Self {
            url: url.into(),
            access_time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetStatus {
    Pending,
    Up,
    Down,
}

/// Listing entry for one registered target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetView {
    pub url: String,
    pub status: TargetStatus,
    #[serde(
        rename = "accessTime",
        default,
        skip_serializing_if = "Option::is_none",
        with = "opt_duration_nanos"
    )]
    pub access_time: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TargetView {
    pub fn new(url: &str, latency: &Latency) -> Self {
        Self {
            url: url.to_string(),
            status: latency.status(),
            access_time: latency.measured(),
            error: match latency {
                Latency::Failed(reason) => Some(reason.clone()),
                _ => None,
            },
        }
    }
}

mod duration_nanos {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_nanos(u64::deserialize(d)?))
    }
}

mod opt_duration_nanos {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match d {
            Some(d) => s.serialize_some(&u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_nanos))
    }
}
