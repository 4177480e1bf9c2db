//! Ping and health endpoints

use axum::{extract::State, http::StatusCode, Json};
use std::collections::HashMap;
use std::sync::Arc;

use crate::infrastructure::http::dto::PingResponse;
use crate::infrastructure::http::state::AppState;

/// Liveness probe
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}

/// Storage health; 503 when the backend reports anything but `up`
pub async fn health(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HashMap<String, String>>) {
    let stats = state.device_repo.health().await;
    let status = match stats.get("status").map(String::as_str) {
        Some("up") => StatusCode::OK,
        _ => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(stats))
}
