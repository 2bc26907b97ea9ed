//! Server status and health handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::error;

use crate::api::responses::{HealthResponse, StatusResponse};
use crate::state::AppState;

/// Handle GET /status - Return current server status
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let (rooms, sessions_recorded, total_study_minutes) = state.totals().map_err(|e| {
        error!("Failed to read totals: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let (last_action, last_action_time) = state.last_action();

    Ok(Json(StatusResponse {
        rooms,
        sessions_recorded,
        total_study_minutes,
        uptime: state.uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
