//! Analytics handlers
//!
//! Each endpoint fetches the relevant slice of the session log under the
//! lock, then runs the pure aggregation functions on the copy.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use tracing::{error, warn};

use crate::analytics::{
    build_heatmap, by_day, by_hour, by_room, by_subject, compare_periods, period_metrics,
    summarize, Period,
};
use crate::api::requests::PeriodQuery;
use crate::api::responses::{
    HeatmapResponse, ScoreResponse, SessionListResponse, SessionResponse, StatisticsResponse,
    SubjectsResponse, SummaryResponse,
};
use crate::state::{AppState, StudySession};

fn resolve_period(query: &PeriodQuery) -> Result<Period, StatusCode> {
    query.resolve().map_err(|reason| {
        warn!("Rejected analytics request: {}", reason);
        StatusCode::BAD_REQUEST
    })
}

fn fetch(state: &AppState, period: Period) -> Result<Vec<StudySession>, StatusCode> {
    state.sessions_for_period(period).map_err(|e| {
        error!("Failed to read session log: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Handle GET /sessions - Sessions recorded in the period, newest first
pub async fn sessions_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<SessionListResponse>, StatusCode> {
    let period = resolve_period(&query)?;
    let sessions = fetch(&state, period)?;

    let sessions: Vec<SessionResponse> = sessions.into_iter().map(SessionResponse::from).collect();
    Ok(Json(SessionListResponse {
        period: period.label(),
        total: sessions.len(),
        sessions,
    }))
}

/// Handle GET /analytics/summary - Headline figures and streak
pub async fn summary_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<SummaryResponse>, StatusCode> {
    let period = resolve_period(&query)?;
    let sessions = fetch(&state, period)?;

    Ok(Json(SummaryResponse {
        period: period.label(),
        summary: summarize(&sessions, period, Utc::now()),
    }))
}

/// Handle GET /analytics/statistics - Hour, weekday, and room distributions
pub async fn statistics_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<StatisticsResponse>, StatusCode> {
    let period = resolve_period(&query)?;
    let sessions = fetch(&state, period)?;

    Ok(Json(StatisticsResponse {
        period: period.label(),
        by_hour: by_hour(&sessions),
        by_day: by_day(&sessions),
        by_room: by_room(&sessions),
    }))
}

/// Handle GET /analytics/subjects - Study time per subject
pub async fn subjects_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<SubjectsResponse>, StatusCode> {
    let period = resolve_period(&query)?;
    let sessions = fetch(&state, period)?;

    Ok(Json(SubjectsResponse {
        period: period.label(),
        subjects: by_subject(&sessions),
    }))
}

/// Handle GET /analytics/heatmap - Weekday-by-hour study intensity
pub async fn heatmap_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<HeatmapResponse>, StatusCode> {
    let period = resolve_period(&query)?;
    let sessions = fetch(&state, period)?;

    Ok(Json(HeatmapResponse {
        period: period.label(),
        heatmap: build_heatmap(&sessions),
    }))
}

/// Handle GET /analytics/score - Productivity score vs the previous period
pub async fn score_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<ScoreResponse>, StatusCode> {
    let period = resolve_period(&query)?;
    let now = Utc::now();

    let current_sessions = state
        .sessions_between(period.start(now), now)
        .map_err(|e| {
            error!("Failed to read session log: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    let previous_sessions = state
        .sessions_between(period.previous_start(now), period.start(now))
        .map_err(|e| {
            error!("Failed to read session log: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let current = period_metrics(&current_sessions, period.days());
    let previous = period_metrics(&previous_sessions, period.days());
    let comparison = compare_periods(&current, &previous);

    Ok(Json(ScoreResponse {
        period: period.label(),
        current,
        previous,
        comparison,
    }))
}
