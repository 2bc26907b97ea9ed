//! Studyroom - A state-managed HTTP server for collaborative study sessions
//!
//! This library provides study rooms with per-room session timers (pomodoro,
//! custom countdown, and unlimited count-up), an append-only session log, and
//! analytics over recorded sessions.

pub mod analytics;
pub mod api;
pub mod config;
pub mod state;
pub mod tasks;
pub mod timer;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use state::AppState;
pub use timer::{TimerEngine, TimerMode};
pub use utils::signals::shutdown_signal;
