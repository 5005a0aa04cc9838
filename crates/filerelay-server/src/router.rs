//! Axum router wiring.
//!
//! `/` is liveness; the metrics route path comes from config.

use axum::{routing::get, Router};

use crate::config::LIVENESS_PATH;
use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let endpoint = state.cfg().metrics_endpoint.clone();
    Router::new()
        .route(LIVENESS_PATH, get(ops::liveness))
        .route(&endpoint, get(ops::metrics))
        .with_state(state)
}
