//! sitewatch server
//!
//! Probes every URL in the configured list on a fixed interval and serves the
//! latest latencies over HTTP.
//!
//! Usage: `sitewatch-server [config.yaml]`. Without an argument,
//! `sitewatch.yaml` is used when present, otherwise built-in defaults.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{fmt, EnvFilter};

use sitewatch_core::error::{Result, SitewatchError};
use sitewatch_server::{app_state::AppState, config, router};

const DEFAULT_CONFIG_PATH: &str = "sitewatch.yaml";
const POLLER_STOP_GRACE: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "sitewatch-server failed");
        std::process::exit(1);
    }
}

fn load_config() -> Result<config::SitewatchConfig> {
    match std::env::args().nth(1) {
        Some(path) => config::load_from_file(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            config::load_from_file(DEFAULT_CONFIG_PATH)
        }
        None => {
            tracing::info!("no config file, using defaults");
            Ok(config::SitewatchConfig::default())
        }
    }
}

async fn run() -> Result<()> {
    let cfg = load_config()?;
    let listen: SocketAddr = cfg.server.listen_addr()?;
    let interval = cfg.poller.interval();

    let state = AppState::build(&cfg)?;
    let app = router::build_router(state.clone());

    let (stop_tx, mut stop_rx) = watch::channel(false);
    let poller_task = state.poller().start(interval, async move {
        let _ = stop_rx.wait_for(|stop| *stop).await;
    });

    tracing::info!(%listen, "sitewatch-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| SitewatchError::Internal(format!("bind {listen} failed: {e}")))?;

    let draining = state.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            draining.set_draining();
            let _ = stop_tx.send(true);
        })
        .await
        .map_err(|e| SitewatchError::Internal(format!("server failed: {e}")))?;

    if tokio::time::timeout(POLLER_STOP_GRACE, poller_task).await.is_err() {
        tracing::warn!("poller did not finish its cycle in time, exiting anyway");
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
