//! Axum router wiring.
//!
//! Exposes the liveness probe and the configured metrics path.

use axum::{routing::get, Router};

use crate::{app_state::AppState, config::schema::HEALTHZ_PATH, ops};

pub fn build_router(state: AppState) -> Router {
    let metrics_path = state.cfg().exporter.metrics_path.clone();
    Router::new()
        .route(HEALTHZ_PATH, get(ops::healthz))
        .route(&metrics_path, get(ops::metrics))
        .with_state(state)
}
