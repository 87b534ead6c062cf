use axum::{
    extract::{Path, RawQuery, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use sitewatch_core::error::SitewatchError;
use sitewatch_core::AccessRecord;

use super::ApiError;
use crate::app_state::AppState;

pub async fn index() -> impl IntoResponse {
    Json(json!({
        "status": true,
        "message": "success",
    }))
}

/// `GET /access/*url` looks up `http://{url}`. A query string on the request
/// belongs to the target URL.
pub async fn access_time(
    State(state): State<AppState>,
    Path(url): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<AccessRecord>, ApiError> {
    let mut url = format!("http://{}", url.trim_start_matches('/'));
    if let Some(query) = query {
        url.push('?');
        url.push_str(&query);
    }
    let record = state.poller().get_latency(&url).await?;
    Ok(Json(record))
}

pub async fn min_access_time(
    State(state): State<AppState>,
) -> Result<Json<AccessRecord>, ApiError> {
    state
        .poller()
        .get_minimum()
        .await
        .map(Json)
        .ok_or_else(|| SitewatchError::NotMeasured("no minimum recorded yet".into()).into())
}

pub async fn max_access_time(
    State(state): State<AppState>,
) -> Result<Json<AccessRecord>, ApiError> {
    state
        .poller()
        .get_maximum()
        .await
        .map(Json)
        .ok_or_else(|| SitewatchError::NotMeasured("no maximum recorded yet".into()).into())
}

pub async fn targets(State(state): State<AppState>) -> impl IntoResponse {
    let poller = state.poller();
    Json(json!({
        "targets": poller.targets().await,
        "cycles": poller.cycles_completed().await,
    }))
}
