use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    activities: usize,
}

/// Health check endpoint
///
/// The roster is in memory, so the service is healthy whenever it can
/// answer. Reports how many activities are loaded.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let activities = state.registry.len().await;

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            activities,
        }),
    )
}
