//! Health check endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub storage: StorageHealthResponse,
}

#[derive(Debug, Serialize)]
pub struct StorageHealthResponse {
    pub backend: String,
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_count: Option<u64>,
}

/// GET /health - Service health
#[tracing::instrument(name = "http.health", skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage = state.prompt_backend.health().await;

    let status = if storage.connected { "ok" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        storage: StorageHealthResponse {
            backend: storage.backend.to_string(),
            connected: storage.connected,
            prompt_count: storage.prompt_count,
        },
    })
}
