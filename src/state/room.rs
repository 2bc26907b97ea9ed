//! Study room structures and per-room state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timer::{TimerEngine, TimerEvent, TimerMode};

use super::{Goal, StudySession};

/// Preset describing what a room is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomPreset {
    Study,
    ExamPrep,
    Reading,
    Coding,
    Homework,
    Language,
}

impl Default for RoomPreset {
    fn default() -> Self {
        Self::Study
    }
}

/// How the timer is drawn client-side. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    Circle,
    Bar,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self::Circle
    }
}

/// Someone who joined a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub online: bool,
}

/// Room metadata shared with clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub preset: RoomPreset,
    pub is_private: bool,
    pub max_participants: usize,
    pub participants: Vec<Participant>,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn new(
        name: String,
        description: Option<String>,
        preset: RoomPreset,
        is_private: bool,
        max_participants: usize,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            preset,
            is_private,
            max_participants,
            participants: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn online_count(&self) -> usize {
        self.participants.iter().filter(|p| p.online).count()
    }

    /// Add a participant by name, or mark a returning one online again.
    ///
    /// Returns false when the room is full.
    pub fn join(&mut self, name: &str) -> bool {
        if let Some(existing) = self.participants.iter_mut().find(|p| p.name == name) {
            existing.online = true;
            return true;
        }
        if self.is_full() {
            return false;
        }
        self.participants.push(Participant {
            name: name.to_string(),
            online: true,
        });
        true
    }

    /// Mark a participant offline. Returns false if the name is unknown.
    pub fn leave(&mut self, name: &str) -> bool {
        match self.participants.iter_mut().find(|p| p.name == name) {
            Some(participant) => {
                participant.online = false;
                true
            }
            None => false,
        }
    }

    /// Case-insensitive match against name and description.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}

/// A room together with its timer engine and accumulated statistics.
///
/// Owned exclusively by [`AppState`](super::AppState) behind its rooms lock.
#[derive(Debug, Clone)]
pub struct RoomState {
    pub room: Room,
    pub timer: TimerEngine,
    pub display_style: DisplayStyle,
    /// Stamped onto recorded sessions for subject analytics
    pub subject: Option<String>,
    pub goal: Goal,
    /// Latest submitted exam score
    pub exam_score: u64,
    pub total_study_seconds: u64,
    pub sessions_completed: u64,
    /// Continuous time accumulated from unlimited-mode time updates
    pub tracked_seconds: u64,
}

impl RoomState {
    pub fn new(room: Room, chunk_seconds: u64) -> Self {
        Self {
            room,
            timer: TimerEngine::with_chunk(TimerMode::Pomodoro, chunk_seconds),
            display_style: DisplayStyle::default(),
            subject: None,
            goal: Goal::none(),
            exam_score: 0,
            total_study_seconds: 0,
            sessions_completed: 0,
            tracked_seconds: 0,
        }
    }

    /// Fold timer events into the room's aggregates and turn completions
    /// into session records for the log.
    pub fn apply_events(&mut self, events: &[TimerEvent]) -> Vec<StudySession> {
        let mut recorded = Vec::new();
        for event in events {
            match event {
                TimerEvent::SessionComplete { seconds } => {
                    self.total_study_seconds += seconds;
                    self.sessions_completed += 1;
                    recorded.push(StudySession {
                        id: Uuid::new_v4(),
                        room_id: self.room.id,
                        room_name: self.room.name.clone(),
                        subject: self.subject.clone(),
                        duration_seconds: *seconds,
                        completed_at: Utc::now(),
                    });
                }
                TimerEvent::TimeUpdate { seconds } => {
                    self.tracked_seconds += seconds;
                }
            }
        }
        recorded
    }

    /// One break is earned per four completed sessions.
    pub fn breaks_taken(&self) -> u64 {
        self.sessions_completed / 4
    }

    /// Evaluate the room goal against the aggregate it measures.
    pub fn goal_progress(&self) -> super::GoalProgress {
        use super::GoalKind;
        let current = match self.goal.kind {
            GoalKind::Time => self.total_study_seconds / 60,
            GoalKind::Sessions => self.sessions_completed,
            GoalKind::Score => self.exam_score,
            GoalKind::None => 0,
        };
        self.goal.evaluate(current)
    }
}
