//! Completed session records
//!
//! Every session-complete event from a room timer is appended here. The log
//! lives for the lifetime of the process; durable persistence belongs to the
//! external store, not this service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed interval of tracked study time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    pub id: Uuid,
    pub room_id: Uuid,
    pub room_name: String,
    pub subject: Option<String>,
    pub duration_seconds: u64,
    pub completed_at: DateTime<Utc>,
}

impl StudySession {
    /// Whole minutes of study time, the unit the analytics work in.
    pub fn duration_minutes(&self) -> u64 {
        self.duration_seconds / 60
    }
}

/// Append-only in-memory session log.
#[derive(Debug, Default)]
pub struct SessionLog {
    sessions: Vec<StudySession>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, session: StudySession) {
        self.sessions.push(session);
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Total minutes across all recorded sessions.
    pub fn total_minutes(&self) -> u64 {
        self.sessions.iter().map(StudySession::duration_minutes).sum()
    }

    /// Sessions completed at or after the cutoff, newest first.
    pub fn since(&self, cutoff: DateTime<Utc>) -> Vec<StudySession> {
        let mut matched: Vec<StudySession> = self
            .sessions
            .iter()
            .filter(|s| s.completed_at >= cutoff)
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        matched
    }

    /// Sessions completed within `start..end`.
    pub fn between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<StudySession> {
        self.sessions
            .iter()
            .filter(|s| s.completed_at >= start && s.completed_at < end)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(minutes: u64, completed_at: DateTime<Utc>) -> StudySession {
        StudySession {
            id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            room_name: "Focused Study Session".to_string(),
            subject: None,
            duration_seconds: minutes * 60,
            completed_at,
        }
    }

    #[test]
    fn since_filters_and_orders_newest_first() {
        let now = Utc::now();
        let mut log = SessionLog::new();
        log.record(session(25, now - Duration::days(10)));
        log.record(session(10, now - Duration::days(2)));
        log.record(session(50, now - Duration::days(1)));

        let recent = log.since(now - Duration::days(7));
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].duration_minutes(), 50);
        assert_eq!(recent[1].duration_minutes(), 10);
    }

    #[test]
    fn between_excludes_the_end_bound() {
        let now = Utc::now();
        let mut log = SessionLog::new();
        log.record(session(25, now - Duration::days(5)));
        log.record(session(25, now));

        let window = log.between(now - Duration::days(7), now);
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn partial_minutes_round_down() {
        let s = session(0, Utc::now());
        assert_eq!(s.duration_minutes(), 0);

        let mut s = s;
        s.duration_seconds = 42;
        assert_eq!(s.duration_minutes(), 0);
        s.duration_seconds = 119;
        assert_eq!(s.duration_minutes(), 1);
    }

    #[test]
    fn total_minutes_sums_the_log() {
        let now = Utc::now();
        let mut log = SessionLog::new();
        log.record(session(25, now));
        log.record(session(10, now));
        assert_eq!(log.total_minutes(), 35);
    }
}
