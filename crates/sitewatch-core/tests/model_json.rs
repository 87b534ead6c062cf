//! Wire shape of the model types.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use serde_json::json;
use sitewatch_core::{AccessRecord, Latency, ProbeOutcome, TargetStatus, TargetView};

#[test]
fn access_record_uses_nanosecond_access_time() {
    let rec = AccessRecord::new("http://a.test", Duration::from_millis(100));
    let v = serde_json::to_value(&rec).unwrap();
    assert_eq!(v, json!({ "url": "http://a.test", "accessTime": 100_000_000u64 }));

    let back: AccessRecord = serde_json::from_value(v).unwrap();
    assert_eq!(back, rec);
}

#[test]
fn target_view_reflects_latency_state() {
    let up = TargetView::new("http://a.test", &Latency::Measured(Duration::from_millis(5)));
    assert_eq!(up.status, TargetStatus::Up);
    assert_eq!(
        serde_json::to_value(&up).unwrap(),
        json!({ "url": "http://a.test", "status": "up", "accessTime": 5_000_000u64 })
    );

    let down = TargetView::new("http://c.test", &Latency::Failed("connection refused".into()));
    assert_eq!(
        serde_json::to_value(&down).unwrap(),
        json!({ "url": "http://c.test", "status": "down", "error": "connection refused" })
    );

    let pending = TargetView::new("http://p.test", &Latency::Pending);
    assert_eq!(
        serde_json::to_value(&pending).unwrap(),
        json!({ "url": "http://p.test", "status": "pending" })
    );
}

#[test]
fn failed_outcome_carries_no_latency() {
    assert_eq!(ProbeOutcome::Failed("dns".into()).latency(), None);
    assert_eq!(
        Latency::from(ProbeOutcome::Measured(Duration::from_millis(1))).measured(),
        Some(Duration::from_millis(1))
    );
}
