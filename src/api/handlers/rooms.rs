//! Room lifecycle handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::requests::{CreateRoomRequest, ParticipantRequest, SearchQuery};
use crate::api::responses::{RoomListResponse, RoomResponse};
use crate::state::{AppState, Room};

/// Handle POST /rooms - Create a new study room
pub async fn create_room_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<RoomResponse>), StatusCode> {
    if let Err(reason) = request.validate() {
        warn!("Rejected room creation: {}", reason);
        return Err(StatusCode::BAD_REQUEST);
    }

    let room = Room::new(
        request.name.trim().to_string(),
        request.description,
        request.preset,
        request.is_private,
        request.max_participants,
    );

    match state.create_room(room) {
        Ok(created) => {
            info!("Room '{}' created", created.room.name);
            Ok((StatusCode::CREATED, Json(RoomResponse::from_state(&created))))
        }
        Err(e) => {
            error!("Failed to create room: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /rooms - List public rooms, newest first
pub async fn list_rooms_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<RoomListResponse>, StatusCode> {
    let search = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty());

    match state.list_rooms(search) {
        Ok(rooms) => {
            let rooms: Vec<RoomResponse> = rooms.iter().map(RoomResponse::from_state).collect();
            let total = rooms.len();
            Ok(Json(RoomListResponse { rooms, total }))
        }
        Err(e) => {
            error!("Failed to list rooms: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /rooms/:id - Fetch one room
pub async fn get_room_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoomResponse>, StatusCode> {
    match state.room(id) {
        Ok(Some(room)) => Ok(Json(RoomResponse::from_state(&room))),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Failed to fetch room {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /rooms/:id/join - Join a room by participant name
pub async fn join_room_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<ParticipantRequest>,
) -> Result<Json<RoomResponse>, StatusCode> {
    let name = request.name.trim().to_string();
    if name.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let outcome = state
        .with_room(id, "join-room", |room| {
            let joined = room.room.join(&name);
            (joined, room.clone())
        })
        .map_err(|e| {
            error!("Failed to join room {}: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    match outcome {
        Some((true, room)) => {
            info!("'{}' joined room '{}'", name, room.room.name);
            Ok(Json(RoomResponse::from_state(&room)))
        }
        Some((false, room)) => {
            warn!("Room '{}' is full", room.room.name);
            Err(StatusCode::CONFLICT)
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Handle POST /rooms/:id/leave - Mark a participant offline
pub async fn leave_room_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<ParticipantRequest>,
) -> Result<Json<RoomResponse>, StatusCode> {
    let name = request.name.trim().to_string();

    let outcome = state
        .with_room(id, "leave-room", |room| {
            let left = room.room.leave(&name);
            (left, room.clone())
        })
        .map_err(|e| {
            error!("Failed to leave room {}: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    match outcome {
        Some((true, room)) => Ok(Json(RoomResponse::from_state(&room))),
        Some((false, _)) => {
            warn!("Unknown participant '{}' leaving room {}", name, id);
            Err(StatusCode::BAD_REQUEST)
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}
