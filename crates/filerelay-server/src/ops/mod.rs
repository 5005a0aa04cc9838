//! HTTP endpoints.
//!
//! - `/`                 : liveness, never touches the snapshot
//! - `<metrics_endpoint>`: current snapshot, byte for byte

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;

/// Prometheus text exposition format.
pub const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

pub async fn liveness() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    // Guard is released here; the body write below runs without it.
    let body = state.store().read().await;

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, METRICS_CONTENT_TYPE)],
        body,
    )
        .into_response()
}
