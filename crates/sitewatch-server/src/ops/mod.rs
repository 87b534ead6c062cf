//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `/readyz`  : readiness (503 while draining or before the first cycle)
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sitewatch_core::TargetStatus;

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    if state.is_draining() {
        (StatusCode::SERVICE_UNAVAILABLE, "draining")
    } else if state.poller().cycles_completed().await == 0 {
        (StatusCode::SERVICE_UNAVAILABLE, "warming")
    } else {
        (StatusCode::OK, "ready")
    }
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let targets = state.poller().targets().await;
    let count = |status: TargetStatus| targets.iter().filter(|t| t.status == status).count() as u64;
    let extra = [
        ("sitewatch_targets_up", count(TargetStatus::Up)),
        ("sitewatch_targets_down", count(TargetStatus::Down)),
        ("sitewatch_targets_pending", count(TargetStatus::Pending)),
    ];
    let body = state.metrics().render(&extra);

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
