//! HTTP API module

pub mod handlers;
pub mod requests;
pub mod responses;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the main application router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Server endpoints
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
        // Room endpoints
        .route("/rooms", post(create_room_handler).get(list_rooms_handler))
        .route("/rooms/:id", get(get_room_handler))
        .route("/rooms/:id/join", post(join_room_handler))
        .route("/rooms/:id/leave", post(leave_room_handler))
        // Timer endpoints
        .route("/rooms/:id/timer", get(timer_status_handler))
        .route("/rooms/:id/timer/configure", post(configure_timer_handler))
        .route("/rooms/:id/timer/start", post(start_timer_handler))
        .route("/rooms/:id/timer/pause", post(pause_timer_handler))
        .route("/rooms/:id/timer/reset", post(reset_timer_handler))
        .route("/rooms/:id/timer/restore", post(restore_timer_handler))
        // Goal endpoints
        .route("/rooms/:id/goal", put(set_goal_handler).get(get_goal_handler))
        .route("/rooms/:id/score", post(submit_score_handler))
        // Analytics endpoints
        .route("/sessions", get(sessions_handler))
        .route("/analytics/summary", get(summary_handler))
        .route("/analytics/statistics", get(statistics_handler))
        .route("/analytics/subjects", get(subjects_handler))
        .route("/analytics/heatmap", get(heatmap_handler))
        .route("/analytics/score", get(score_handler))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
