//! Goal and exam-score handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::requests::{GoalRequest, ScoreRequest};
use crate::state::{AppState, Goal, GoalProgress};

/// Handle PUT /rooms/:id/goal - Set or clear the room goal
pub async fn set_goal_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<GoalRequest>,
) -> Result<Json<GoalProgress>, StatusCode> {
    if let Err(reason) = request.validate() {
        warn!("Rejected goal for room {}: {}", id, reason);
        return Err(StatusCode::BAD_REQUEST);
    }

    let progress = state
        .with_room(id, "set-goal", |room| {
            info!(
                "Setting goal for room '{}': {:?} target={}",
                room.room.name, request.kind, request.target
            );
            room.goal = Goal::new(request.kind, request.target);
            room.goal_progress()
        })
        .map_err(|e| {
            error!("Failed to set goal for room {}: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    progress.map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Handle GET /rooms/:id/goal - Current goal progress
pub async fn get_goal_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GoalProgress>, StatusCode> {
    match state.room(id) {
        Ok(Some(room)) => Ok(Json(room.goal_progress())),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Failed to read goal for room {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /rooms/:id/score - Record an exam score for the room
pub async fn submit_score_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<GoalProgress>, StatusCode> {
    if let Err(reason) = request.validate() {
        warn!("Rejected score for room {}: {}", id, reason);
        return Err(StatusCode::BAD_REQUEST);
    }

    let progress = state
        .with_room(id, "submit-score", |room| {
            info!("Room '{}' scored {} points", room.room.name, request.points);
            room.exam_score = request.points;
            room.goal_progress()
        })
        .map_err(|e| {
            error!("Failed to record score for room {}: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    progress.map(Json).ok_or(StatusCode::NOT_FOUND)
}
