//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - metrics path (default `/metrics`) : Prometheus text format

use axum::{extract::State, http::StatusCode, response::{IntoResponse, Response}};

use promtally_core::CONTENT_TYPE;

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.scrape();

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, CONTENT_TYPE)],
        body,
    )
        .into_response()
}
