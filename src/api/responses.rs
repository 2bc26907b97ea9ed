//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analytics::{
    DayBucket, Heatmap, HourBucket, PeriodMetrics, RoomBucket, ScoreComparison, SubjectBucket,
    Summary,
};
use crate::state::{DisplayStyle, GoalProgress, Participant, RoomPreset, RoomState, StudySession};
use crate::timer::{TimerMode, TimerSnapshot};
use crate::utils::format_clock;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Server-wide status response
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub rooms: usize,
    pub sessions_recorded: usize,
    pub total_study_minutes: u64,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// One room as shown to clients
#[derive(Debug, Clone, Serialize)]
pub struct RoomResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub preset: RoomPreset,
    pub is_private: bool,
    pub max_participants: usize,
    pub participants: Vec<Participant>,
    pub online: usize,
    pub created_at: DateTime<Utc>,
    pub subject: Option<String>,
    pub timer_mode: &'static str,
    pub total_study_minutes: u64,
    pub sessions_completed: u64,
    pub breaks_taken: u64,
    pub goal: GoalProgress,
}

impl RoomResponse {
    pub fn from_state(state: &RoomState) -> Self {
        Self {
            id: state.room.id,
            name: state.room.name.clone(),
            description: state.room.description.clone(),
            preset: state.room.preset,
            is_private: state.room.is_private,
            max_participants: state.room.max_participants,
            participants: state.room.participants.clone(),
            online: state.room.online_count(),
            created_at: state.room.created_at,
            subject: state.subject.clone(),
            timer_mode: state.timer.mode().label(),
            total_study_minutes: state.total_study_seconds / 60,
            sessions_completed: state.sessions_completed,
            breaks_taken: state.breaks_taken(),
            goal: state.goal_progress(),
        }
    }
}

/// Room listing with its total count
#[derive(Debug, Clone, Serialize)]
pub struct RoomListResponse {
    pub rooms: Vec<RoomResponse>,
    pub total: usize,
}

/// Full timer state for one room
#[derive(Debug, Clone, Serialize)]
pub struct TimerResponse {
    pub mode: &'static str,
    pub custom_minutes: Option<u64>,
    pub running: bool,
    pub remaining_seconds: Option<u64>,
    pub elapsed_seconds: Option<u64>,
    pub total_seconds: Option<u64>,
    pub progress: f64,
    /// Clock-style rendering of the counter, e.g. "24:59" or "01:02:03"
    pub display: String,
    pub display_style: DisplayStyle,
    pub subject: Option<String>,
    /// State the client can hand back to timer/restore after a reload
    pub snapshot: TimerSnapshot,
}

impl TimerResponse {
    pub fn from_state(state: &RoomState) -> Self {
        let timer = &state.timer;
        let counter = timer
            .remaining_seconds()
            .or_else(|| timer.elapsed_seconds())
            .unwrap_or(0);

        Self {
            mode: timer.mode().label(),
            custom_minutes: match timer.mode() {
                TimerMode::Custom(minutes) => Some(minutes),
                _ => None,
            },
            running: timer.is_running(),
            remaining_seconds: timer.remaining_seconds(),
            elapsed_seconds: timer.elapsed_seconds(),
            total_seconds: timer.mode().total_seconds(),
            progress: timer.progress(),
            display: format_clock(counter),
            display_style: state.display_style,
            subject: state.subject.clone(),
            snapshot: timer.snapshot(),
        }
    }
}

/// One recorded session
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub room_id: Uuid,
    pub room_name: String,
    pub subject: Option<String>,
    pub duration_seconds: u64,
    pub duration_minutes: u64,
    pub completed_at: DateTime<Utc>,
}

impl From<StudySession> for SessionResponse {
    fn from(session: StudySession) -> Self {
        Self {
            id: session.id,
            room_id: session.room_id,
            room_name: session.room_name.clone(),
            subject: session.subject.clone(),
            duration_seconds: session.duration_seconds,
            duration_minutes: session.duration_minutes(),
            completed_at: session.completed_at,
        }
    }
}

/// Session listing for one period
#[derive(Debug, Clone, Serialize)]
pub struct SessionListResponse {
    pub period: &'static str,
    pub total: usize,
    pub sessions: Vec<SessionResponse>,
}

/// Hour/day/room distributions for one period
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsResponse {
    pub period: &'static str,
    pub by_hour: Vec<HourBucket>,
    pub by_day: Vec<DayBucket>,
    pub by_room: Vec<RoomBucket>,
}

/// Subject distribution for one period
#[derive(Debug, Clone, Serialize)]
pub struct SubjectsResponse {
    pub period: &'static str,
    pub subjects: Vec<SubjectBucket>,
}

/// Heatmap for one period
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapResponse {
    pub period: &'static str,
    #[serde(flatten)]
    pub heatmap: Heatmap,
}

/// Productivity score with previous-period comparison
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub period: &'static str,
    pub current: PeriodMetrics,
    pub previous: PeriodMetrics,
    pub comparison: ScoreComparison,
}

/// Headline summary for one period
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub period: &'static str,
    #[serde(flatten)]
    pub summary: Summary,
}
