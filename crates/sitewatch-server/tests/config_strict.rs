#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use sitewatch_server::config::{self, ExtremesPolicy};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
poller:
  url_file: "url.txt"
  workerz: 4 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.server.listen, "0.0.0.0:3000");
    assert_eq!(cfg.poller.url_file, "url.txt");
    assert_eq!(cfg.poller.interval(), Duration::from_secs(60));
    assert_eq!(cfg.poller.workers, 16);
    assert_eq!(cfg.poller.probe_timeout(), None);
    assert_eq!(cfg.poller.extremes, ExtremesPolicy::Cycle);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:8081"
poller:
  url_file: "sites.txt"
  interval_ms: 5000
  workers: 4
  probe_timeout_ms: 2500
  extremes: all_time
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 8081);
    assert_eq!(cfg.poller.url_file, "sites.txt");
    assert_eq!(cfg.poller.interval(), Duration::from_secs(5));
    assert_eq!(cfg.poller.workers, 4);
    assert_eq!(cfg.poller.probe_timeout(), Some(Duration::from_millis(2500)));
    assert_eq!(cfg.poller.extremes, ExtremesPolicy::AllTime);
}

#[test]
fn rejects_out_of_range_values() {
    for bad in [
        "version: 2\n",
        "version: 1\nserver: { listen: \"nope\" }\n",
        "version: 1\npoller: { workers: 0 }\n",
        "version: 1\npoller: { interval_ms: 10 }\n",
        "version: 1\npoller: { probe_timeout_ms: 0 }\n",
        "version: 1\npoller: { url_file: \"\" }\n",
        "version: 1\npoller: { extremes: weekly }\n",
    ] {
        assert!(config::load_from_str(bad).is_err(), "{bad}");
    }
    assert_eq!(
        config::load_from_str("version: 2\n").unwrap_err().client_code().as_str(),
        "UNSUPPORTED_VERSION"
    );
}

#[test]
fn default_config_validates() {
    config::SitewatchConfig::default().validate().expect("defaults are valid");
}
