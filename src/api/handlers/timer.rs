//! Timer control handlers
//!
//! Every mutating endpoint funnels through [`AppState::apply_timer`] or
//! [`AppState::with_room`], so completion events are folded into room
//! aggregates and the session log before the response is built.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::requests::{ConfigureTimerRequest, RestoreTimerRequest};
use crate::api::responses::TimerResponse;
use crate::state::AppState;
use crate::timer::TimerEngine;

fn internal(id: Uuid, op: &str) -> impl FnOnce(String) -> StatusCode + '_ {
    move |e| {
        error!("Failed to {} timer for room {}: {}", op, id, e);
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Handle GET /rooms/:id/timer - Current timer state
pub async fn timer_status_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TimerResponse>, StatusCode> {
    match state.room(id) {
        Ok(Some(room)) => Ok(Json(TimerResponse::from_state(&room))),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(internal(id, "read")(e)),
    }
}

/// Handle POST /rooms/:id/timer/configure - Reinitialize the timer
pub async fn configure_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<ConfigureTimerRequest>,
) -> Result<Json<TimerResponse>, StatusCode> {
    if let Err(reason) = request.validate() {
        warn!("Rejected timer configuration for room {}: {}", id, reason);
        return Err(StatusCode::BAD_REQUEST);
    }

    let updated = state
        .with_room(id, "configure-timer", |room| {
            info!("Configuring room '{}' timer: {}", room.room.name, request.mode);
            room.timer.configure(request.mode);
            if let Some(style) = request.display_style {
                room.display_style = style;
            }
            if let Some(subject) = &request.subject {
                let subject = subject.trim();
                room.subject = (!subject.is_empty()).then(|| subject.to_string());
            }
            room.clone()
        })
        .map_err(internal(id, "configure"))?;

    updated
        .map(|room| Json(TimerResponse::from_state(&room)))
        .ok_or(StatusCode::NOT_FOUND)
}

/// Handle POST /rooms/:id/timer/start - Start or resume the timer
pub async fn start_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TimerResponse>, StatusCode> {
    let updated = state
        .apply_timer(id, "start-timer", |room| {
            room.timer.start();
            Vec::new()
        })
        .map_err(internal(id, "start"))?;

    updated
        .map(|room| Json(TimerResponse::from_state(&room)))
        .ok_or(StatusCode::NOT_FOUND)
}

/// Handle POST /rooms/:id/timer/pause - Pause the timer
pub async fn pause_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TimerResponse>, StatusCode> {
    let updated = state
        .apply_timer(id, "pause-timer", |room| room.timer.pause())
        .map_err(internal(id, "pause"))?;

    updated
        .map(|room| Json(TimerResponse::from_state(&room)))
        .ok_or(StatusCode::NOT_FOUND)
}

/// Handle POST /rooms/:id/timer/reset - Reset to the configured state
pub async fn reset_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TimerResponse>, StatusCode> {
    let updated = state
        .apply_timer(id, "reset-timer", |room| room.timer.reset())
        .map_err(internal(id, "reset"))?;

    updated
        .map(|room| Json(TimerResponse::from_state(&room)))
        .ok_or(StatusCode::NOT_FOUND)
}

/// Handle POST /rooms/:id/timer/restore - Rebuild the timer from a snapshot
///
/// The restored timer is always stopped; the client restarts it explicitly.
pub async fn restore_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<RestoreTimerRequest>,
) -> Result<Json<TimerResponse>, StatusCode> {
    if let Err(reason) = request.validate() {
        warn!("Rejected timer snapshot for room {}: {}", id, reason);
        return Err(StatusCode::BAD_REQUEST);
    }

    let chunk_seconds = state.chunk_seconds;
    let updated = state
        .with_room(id, "restore-timer", |room| {
            room.timer = TimerEngine::from_snapshot(request.snapshot, chunk_seconds);
            room.clone()
        })
        .map_err(internal(id, "restore"))?;

    updated
        .map(|room| Json(TimerResponse::from_state(&room)))
        .ok_or(StatusCode::NOT_FOUND)
}
