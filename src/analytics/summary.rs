//! Headline summary for the analytics dashboard

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::state::StudySession;

use super::{by_day, Period};

/// The weekday with the most study time.
#[derive(Debug, Clone, Serialize)]
pub struct BestDay {
    pub day: &'static str,
    pub minutes: u64,
}

/// Headline figures for one period.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_minutes: u64,
    pub average_daily_minutes: u64,
    pub best_day: Option<BestDay>,
    /// Consecutive days with at least one session, ending today or yesterday
    pub streak_days: u64,
}

/// Summarize sessions already filtered to the period.
pub fn summarize(sessions: &[StudySession], period: Period, now: DateTime<Utc>) -> Summary {
    let total_minutes: u64 = sessions.iter().map(StudySession::duration_minutes).sum();
    let average_daily_minutes = total_minutes / period.days().max(1);

    let best_day = by_day(sessions)
        .into_iter()
        .max_by_key(|bucket| bucket.minutes)
        .filter(|bucket| bucket.minutes > 0)
        .map(|bucket| BestDay {
            day: bucket.day,
            minutes: bucket.minutes,
        });

    Summary {
        total_minutes,
        average_daily_minutes,
        best_day,
        streak_days: streak(sessions, now.date_naive()),
    }
}

/// Count consecutive days with sessions walking back from today. A streak
/// that has not studied today yet is still alive, so counting may start at
/// yesterday instead.
fn streak(sessions: &[StudySession], today: NaiveDate) -> u64 {
    let days: HashSet<NaiveDate> = sessions.iter().map(|s| s.completed_at.date_naive()).collect();

    let mut cursor = if days.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };

    let mut count = 0;
    while days.contains(&cursor) {
        count += 1;
        cursor -= Duration::days(1);
    }
    count
}
