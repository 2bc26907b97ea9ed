//! End-to-end tests running requests through the full router

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use studyroom::{create_router, AppState};

fn app() -> Router {
    let state = Arc::new(AppState::new(0, "127.0.0.1".to_string(), 1500));
    create_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_room(app: &Router, body: Value) -> String {
    let (status, room) = send(app, "POST", "/rooms", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    room["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn created_room_starts_with_a_stopped_pomodoro() {
    let app = app();
    let id = create_room(&app, json!({"name": "Evening Study"})).await;

    let (status, room) = send(&app, "GET", &format!("/rooms/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(room["name"], "Evening Study");
    assert_eq!(room["timer_mode"], "pomodoro");
    assert_eq!(room["max_participants"], 10);

    let (status, timer) = send(&app, "GET", &format!("/rooms/{id}/timer"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(timer["running"], false);
    assert_eq!(timer["remaining_seconds"], 1500);
    assert_eq!(timer["display"], "25:00");
}

#[tokio::test]
async fn room_creation_is_validated() {
    let app = app();
    let (status, _) = send(&app, "POST", "/rooms", Some(json!({"name": "  "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/rooms",
        Some(json!({"name": "Hall", "max_participants": 51})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn private_rooms_are_hidden_from_the_listing() {
    let app = app();
    create_room(&app, json!({"name": "Open Hall"})).await;
    create_room(&app, json!({"name": "Hidden Corner", "is_private": true})).await;

    let (status, listing) = send(&app, "GET", "/rooms", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["total"], 1);
    assert_eq!(listing["rooms"][0]["name"], "Open Hall");

    let (status, listing) = send(&app, "GET", "/rooms?search=open", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["total"], 1);
}

#[tokio::test]
async fn unknown_room_yields_not_found() {
    let app = app();
    let missing = "00000000-0000-0000-0000-000000000000";

    for uri in [
        format!("/rooms/{missing}"),
        format!("/rooms/{missing}/timer"),
        format!("/rooms/{missing}/goal"),
    ] {
        let (status, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    let (status, _) = send(
        &app,
        "POST",
        &format!("/rooms/{missing}/timer/start"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn joining_a_full_room_conflicts() {
    let app = app();
    let id = create_room(&app, json!({"name": "Pair Desk", "max_participants": 1})).await;

    let (status, room) = send(
        &app,
        "POST",
        &format!("/rooms/{id}/join"),
        Some(json!({"name": "mina"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(room["online"], 1);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/rooms/{id}/join"),
        Some(json!({"name": "jun"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Leaving marks the participant offline but keeps them on the roster
    let (status, room) = send(
        &app,
        "POST",
        &format!("/rooms/{id}/leave"),
        Some(json!({"name": "mina"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(room["online"], 0);
    assert_eq!(room["participants"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn timer_can_be_configured_and_started() {
    let app = app();
    let id = create_room(&app, json!({"name": "Sprint"})).await;

    let (status, timer) = send(
        &app,
        "POST",
        &format!("/rooms/{id}/timer/configure"),
        Some(json!({"mode": "custom", "custom_minutes": 30, "subject": "Algebra"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(timer["mode"], "custom");
    assert_eq!(timer["custom_minutes"], 30);
    assert_eq!(timer["remaining_seconds"], 1800);
    assert_eq!(timer["subject"], "Algebra");
    assert_eq!(timer["running"], false);

    let (status, timer) = send(&app, "POST", &format!("/rooms/{id}/timer/start"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(timer["running"], true);

    let (status, timer) = send(&app, "POST", &format!("/rooms/{id}/timer/pause"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(timer["running"], false);
    assert_eq!(timer["remaining_seconds"], 1800);
}

#[tokio::test]
async fn out_of_bounds_custom_minutes_are_rejected() {
    let app = app();
    let id = create_room(&app, json!({"name": "Sprint"})).await;

    for minutes in [0u64, 121, u64::MAX] {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/rooms/{id}/timer/configure"),
            Some(json!({"mode": "custom", "custom_minutes": minutes})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    // The same bound guards snapshots handed to restore
    let (status, _) = send(
        &app,
        "POST",
        &format!("/rooms/{id}/timer/restore"),
        Some(json!({"snapshot": {"mode": "custom", "custom_minutes": u64::MAX, "counter": 450, "running": false}})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn snapshot_restore_survives_a_reload_stopped() {
    let app = app();
    let id = create_room(&app, json!({"name": "Sprint"})).await;

    let (_, timer) = send(
        &app,
        "POST",
        &format!("/rooms/{id}/timer/configure"),
        Some(json!({"mode": "custom", "custom_minutes": 10})),
    )
    .await;
    let snapshot = timer["snapshot"].clone();
    assert_eq!(snapshot["counter"], 600);

    let (status, restored) = send(
        &app,
        "POST",
        &format!("/rooms/{id}/timer/restore"),
        Some(json!({"snapshot": {"mode": "custom", "custom_minutes": 10, "counter": 450, "running": true}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(restored["remaining_seconds"], 450);
    // A restored timer never resumes on its own
    assert_eq!(restored["running"], false);
}

#[tokio::test]
async fn goal_and_score_round_trip() {
    let app = app();
    let id = create_room(&app, json!({"name": "Exam Prep", "preset": "exam-prep"})).await;

    let (status, progress) = send(
        &app,
        "PUT",
        &format!("/rooms/{id}/goal"),
        Some(json!({"kind": "score", "target": 800})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(progress["kind"], "score");
    assert_eq!(progress["current"], 0);

    let (status, progress) = send(
        &app,
        "POST",
        &format!("/rooms/{id}/score"),
        Some(json!({"points": 600})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(progress["current"], 600);
    assert_eq!(progress["percentage"], 75);
    assert_eq!(progress["completed"], false);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/rooms/{id}/score"),
        Some(json!({"points": 1001})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, progress) = send(&app, "GET", &format!("/rooms/{id}/goal"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(progress["target"], 800);
}

#[tokio::test]
async fn analytics_endpoints_answer_on_an_empty_log() {
    let app = app();

    let (status, sessions) = send(&app, "GET", "/sessions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sessions["total"], 0);

    let (status, summary) = send(&app, "GET", "/analytics/summary?period=month", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["period"], "month");
    assert_eq!(summary["total_minutes"], 0);
    assert_eq!(summary["streak_days"], 0);

    let (status, stats) = send(&app, "GET", "/analytics/statistics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["by_hour"].as_array().unwrap().len(), 24);
    assert_eq!(stats["by_day"].as_array().unwrap().len(), 7);

    let (status, heatmap) = send(&app, "GET", "/analytics/heatmap", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(heatmap["cells"].as_array().unwrap().len(), 168);

    let (status, score) = send(&app, "GET", "/analytics/score", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(score["current"]["productivity"], 0);

    let (status, _) = send(&app, "GET", "/analytics/summary?period=decade", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn status_reflects_room_activity() {
    let app = app();
    let (status, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rooms"], 0);
    assert!(body["last_action"].is_null());

    create_room(&app, json!({"name": "Hall"})).await;

    let (status, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rooms"], 1);
    assert_eq!(body["last_action"], "create-room");
}
