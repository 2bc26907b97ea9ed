//! Study timer engine
//!
//! A pure in-memory state machine with no I/O. The hosting room owns one
//! engine and drives it from the 1 Hz tick task.

pub mod engine;

// Re-export main types
pub use engine::{TimerEngine, TimerEvent, TimerMode, TimerSnapshot};
pub use engine::{DEFAULT_CHUNK_SECONDS, POMODORO_SECONDS, PROGRESS_CYCLE_SECONDS};
