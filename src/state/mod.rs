//! State management module
//!
//! This module contains all state-related structures and their management logic.

pub mod app_state;
pub mod goal;
pub mod room;
pub mod sessions;

// Re-export main types
pub use app_state::AppState;
pub use goal::{Goal, GoalKind, GoalProgress};
pub use room::{DisplayStyle, Participant, Room, RoomPreset, RoomState};
pub use sessions::{SessionLog, StudySession};
