//! Main application state management

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Instant,
};

use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analytics::Period;
use crate::utils::format_duration;

use super::{Room, RoomState, SessionLog, StudySession};

/// Main application state shared across handlers and the tick task
#[derive(Debug)]
pub struct AppState {
    /// All rooms, keyed by id; each owns its timer engine
    rooms: Arc<Mutex<HashMap<Uuid, RoomState>>>,
    /// Append-only log of completed sessions
    sessions: Arc<Mutex<SessionLog>>,
    /// Unlimited-mode chunk interval applied to new rooms
    pub chunk_seconds: u64,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Arc<Mutex<Option<String>>>,
    last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Fan-out of freshly recorded sessions
    pub session_event_tx: broadcast::Sender<StudySession>,
    /// Keep one receiver alive so sends never fail without subscribers
    _session_event_rx: broadcast::Receiver<StudySession>,
}

impl AppState {
    /// Create a new AppState with no rooms and an empty session log
    pub fn new(port: u16, host: String, chunk_seconds: u64) -> Self {
        let (session_event_tx, session_event_rx) = broadcast::channel(100);

        Self {
            rooms: Arc::new(Mutex::new(HashMap::new())),
            sessions: Arc::new(Mutex::new(SessionLog::new())),
            chunk_seconds,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            session_event_tx,
            _session_event_rx: session_event_rx,
        }
    }

    /// Insert a new room and return its initial state
    pub fn create_room(&self, room: Room) -> Result<RoomState, String> {
        let state = RoomState::new(room, self.chunk_seconds);
        let mut rooms = self
            .rooms
            .lock()
            .map_err(|e| format!("Failed to lock rooms: {}", e))?;
        info!("Creating room '{}' ({})", state.room.name, state.room.id);
        rooms.insert(state.room.id, state.clone());
        drop(rooms);

        self.touch("create-room");
        Ok(state)
    }

    /// Public rooms, newest first, optionally filtered by a search query
    pub fn list_rooms(&self, search: Option<&str>) -> Result<Vec<RoomState>, String> {
        let rooms = self
            .rooms
            .lock()
            .map_err(|e| format!("Failed to lock rooms: {}", e))?;

        let mut listed: Vec<RoomState> = rooms
            .values()
            .filter(|state| !state.room.is_private)
            .filter(|state| search.is_none_or(|q| state.room.matches_search(q)))
            .cloned()
            .collect();
        listed.sort_by(|a, b| b.room.created_at.cmp(&a.room.created_at));
        Ok(listed)
    }

    /// Fetch one room by id
    pub fn room(&self, id: Uuid) -> Result<Option<RoomState>, String> {
        let rooms = self
            .rooms
            .lock()
            .map_err(|e| format!("Failed to lock rooms: {}", e))?;
        Ok(rooms.get(&id).cloned())
    }

    /// Run a closure against one room's state and track the action.
    ///
    /// Returns `Ok(None)` when the room does not exist.
    pub fn with_room<T>(
        &self,
        id: Uuid,
        action: &str,
        f: impl FnOnce(&mut RoomState) -> T,
    ) -> Result<Option<T>, String> {
        let mut rooms = self
            .rooms
            .lock()
            .map_err(|e| format!("Failed to lock rooms: {}", e))?;

        let Some(state) = rooms.get_mut(&id) else {
            return Ok(None);
        };
        let result = f(state);
        drop(rooms);

        self.touch(action);
        Ok(Some(result))
    }

    /// Run a timer operation on one room, fold the resulting events into its
    /// aggregates, record any completed sessions, and return the updated
    /// room state.
    pub fn apply_timer(
        &self,
        id: Uuid,
        action: &str,
        f: impl FnOnce(&mut RoomState) -> Vec<crate::timer::TimerEvent>,
    ) -> Result<Option<RoomState>, String> {
        let mut rooms = self
            .rooms
            .lock()
            .map_err(|e| format!("Failed to lock rooms: {}", e))?;

        let Some(state) = rooms.get_mut(&id) else {
            return Ok(None);
        };
        let events = f(state);
        let recorded = state.apply_events(&events);
        let updated = state.clone();
        drop(rooms);

        self.record_sessions(recorded)?;
        self.touch(action);
        Ok(Some(updated))
    }

    /// Advance every running room timer by one second.
    ///
    /// Invoked once per second by the tick task; ticks are synchronous and
    /// complete before the lock is released.
    pub fn tick_all(&self) -> Result<Vec<StudySession>, String> {
        let mut rooms = self
            .rooms
            .lock()
            .map_err(|e| format!("Failed to lock rooms: {}", e))?;

        let mut recorded = Vec::new();
        for state in rooms.values_mut() {
            if state.timer.is_running() {
                let events = state.timer.tick();
                recorded.extend(state.apply_events(&events));
            }
        }
        Ok(recorded)
    }

    /// Append session records to the log and notify subscribers.
    ///
    /// A failed append never rolls back timer state; the engine has already
    /// moved on.
    pub fn record_sessions(&self, recorded: Vec<StudySession>) -> Result<(), String> {
        if recorded.is_empty() {
            return Ok(());
        }

        let mut sessions = self
            .sessions
            .lock()
            .map_err(|e| format!("Failed to lock session log: {}", e))?;
        for session in recorded {
            info!(
                "Recorded session: room='{}' duration={}s subject={:?}",
                session.room_name, session.duration_seconds, session.subject
            );
            sessions.record(session.clone());
            if let Err(e) = self.session_event_tx.send(session) {
                warn!("Failed to send session notification: {}", e);
            }
        }
        Ok(())
    }

    /// Sessions completed within the given period, newest first
    pub fn sessions_for_period(&self, period: Period) -> Result<Vec<StudySession>, String> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|e| format!("Failed to lock session log: {}", e))?;
        Ok(sessions.since(period.start(Utc::now())))
    }

    /// Sessions completed within `start..end`
    pub fn sessions_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<StudySession>, String> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|e| format!("Failed to lock session log: {}", e))?;
        Ok(sessions.between(start, end))
    }

    /// Room count, recorded session count, and total study minutes
    pub fn totals(&self) -> Result<(usize, usize, u64), String> {
        let rooms = self
            .rooms
            .lock()
            .map_err(|e| format!("Failed to lock rooms: {}", e))?;
        let room_count = rooms.len();
        drop(rooms);

        let sessions = self
            .sessions
            .lock()
            .map_err(|e| format!("Failed to lock session log: {}", e))?;
        Ok((room_count, sessions.len(), sessions.total_minutes()))
    }

    /// Calculate server uptime as a formatted string
    pub fn uptime(&self) -> String {
        format_duration(self.start_time.elapsed().as_secs())
    }

    /// Get last action information
    pub fn last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn touch(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }
}
