//! Productivity scoring
//!
//! Three capped sub-scores combined into one weighted figure. Consistency
//! carries the most weight since regular practice matters most for learning.

use std::collections::HashSet;

use serde::Serialize;

use crate::state::StudySession;

/// Daily study time considered excellent, in minutes.
const EXCELLENT_DAILY_MINUTES: f64 = 120.0;
/// Session length considered excellent, in minutes.
const EXCELLENT_SESSION_MINUTES: f64 = 45.0;

/// Aggregate metrics and scores for one reporting period.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PeriodMetrics {
    pub total_minutes: u64,
    pub sessions_count: u64,
    pub average_session_minutes: f64,
    pub days_with_sessions: u64,
    pub total_days: u64,
    /// Share of days with at least one session, 0-100
    pub consistency: u64,
    /// Average daily study time vs the excellent benchmark, 0-100
    pub intensity: u64,
    /// Average session length vs the excellent benchmark, 0-100
    pub focus: u64,
    /// 0.5 * consistency + 0.3 * intensity + 0.2 * focus
    pub productivity: u64,
}

/// Signed percentage change of each headline figure vs the previous period.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreComparison {
    pub total_minutes: i64,
    pub sessions_count: i64,
    pub average_session_minutes: i64,
    pub productivity: i64,
}

/// Compute the metrics for one period spanning `total_days` days.
pub fn period_metrics(sessions: &[StudySession], total_days: u64) -> PeriodMetrics {
    let total_days = total_days.max(1);
    let total_minutes: u64 = sessions.iter().map(StudySession::duration_minutes).sum();
    let sessions_count = sessions.len() as u64;
    let average_session_minutes = if sessions_count == 0 {
        0.0
    } else {
        total_minutes as f64 / sessions_count as f64
    };

    let days_with_sessions = sessions
        .iter()
        .map(|s| s.completed_at.date_naive())
        .collect::<HashSet<_>>()
        .len() as u64;

    let consistency = ((days_with_sessions as f64 / total_days as f64) * 100.0).round() as u64;
    let daily_average = total_minutes as f64 / total_days as f64;
    let intensity = (((daily_average / EXCELLENT_DAILY_MINUTES) * 100.0).round() as u64).min(100);
    let focus = (((average_session_minutes / EXCELLENT_SESSION_MINUTES) * 100.0).round() as u64)
        .min(100);

    let productivity =
        (consistency as f64 * 0.5 + intensity as f64 * 0.3 + focus as f64 * 0.2).round() as u64;

    PeriodMetrics {
        total_minutes,
        sessions_count,
        average_session_minutes,
        days_with_sessions,
        total_days,
        consistency,
        intensity,
        focus,
        productivity,
    }
}

/// Signed percentage change from `previous` to `current`.
pub fn percentage_change(current: f64, previous: f64) -> i64 {
    if previous == 0.0 {
        if current > 0.0 {
            100
        } else {
            0
        }
    } else {
        (((current - previous) / previous) * 100.0).round() as i64
    }
}

/// Compare two periods. A previous period with no study time reads as all-new.
pub fn compare_periods(current: &PeriodMetrics, previous: &PeriodMetrics) -> ScoreComparison {
    if previous.total_minutes == 0 {
        return ScoreComparison {
            total_minutes: 100,
            sessions_count: 100,
            average_session_minutes: 100,
            productivity: 100,
        };
    }

    ScoreComparison {
        total_minutes: percentage_change(
            current.total_minutes as f64,
            previous.total_minutes as f64,
        ),
        sessions_count: percentage_change(
            current.sessions_count as f64,
            previous.sessions_count as f64,
        ),
        average_session_minutes: percentage_change(
            current.average_session_minutes,
            previous.average_session_minutes,
        ),
        productivity: percentage_change(
            current.productivity as f64,
            previous.productivity as f64,
        ),
    }
}
