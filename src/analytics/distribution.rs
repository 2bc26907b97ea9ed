//! Study time distributions by hour, weekday, room, and subject

use std::collections::HashMap;

use chrono::{Datelike, Timelike};
use serde::Serialize;

use crate::state::StudySession;

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Minutes studied within one hour of the day.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HourBucket {
    pub hour: u32,
    pub minutes: u64,
    pub percentage: u64,
}

/// Minutes studied on one weekday.
#[derive(Debug, Clone, Serialize)]
pub struct DayBucket {
    pub day: &'static str,
    pub minutes: u64,
    pub percentage: u64,
}

/// Minutes studied in one room.
#[derive(Debug, Clone, Serialize)]
pub struct RoomBucket {
    pub room_name: String,
    pub minutes: u64,
    pub percentage: u64,
}

/// Minutes studied on one subject.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectBucket {
    pub subject: String,
    pub minutes: u64,
    pub percentage: u64,
}

fn percent(minutes: u64, total: u64) -> u64 {
    if total == 0 {
        0
    } else {
        ((minutes as f64 / total as f64) * 100.0).round() as u64
    }
}

/// Bucket minutes by hour of day (0-23).
pub fn by_hour(sessions: &[StudySession]) -> Vec<HourBucket> {
    let mut minutes_per_hour = [0u64; 24];
    for session in sessions {
        minutes_per_hour[session.completed_at.hour() as usize] += session.duration_minutes();
    }
    let total: u64 = minutes_per_hour.iter().sum();

    minutes_per_hour
        .iter()
        .enumerate()
        .map(|(hour, &minutes)| HourBucket {
            hour: hour as u32,
            minutes,
            percentage: percent(minutes, total),
        })
        .collect()
}

/// Bucket minutes by weekday, reported Monday-first.
pub fn by_day(sessions: &[StudySession]) -> Vec<DayBucket> {
    let mut minutes_per_day = [0u64; 7];
    for session in sessions {
        let index = session.completed_at.weekday().num_days_from_monday() as usize;
        minutes_per_day[index] += session.duration_minutes();
    }
    let total: u64 = minutes_per_day.iter().sum();

    minutes_per_day
        .iter()
        .zip(DAY_NAMES)
        .map(|(&minutes, day)| DayBucket {
            day,
            minutes,
            percentage: percent(minutes, total),
        })
        .collect()
}

/// Minutes per room, descending, limited to the top 10.
pub fn by_room(sessions: &[StudySession]) -> Vec<RoomBucket> {
    let mut minutes_per_room: HashMap<&str, u64> = HashMap::new();
    for session in sessions {
        *minutes_per_room.entry(session.room_name.as_str()).or_default() +=
            session.duration_minutes();
    }
    let total: u64 = minutes_per_room.values().sum();

    let mut buckets: Vec<RoomBucket> = minutes_per_room
        .into_iter()
        .map(|(room_name, minutes)| RoomBucket {
            room_name: room_name.to_string(),
            minutes,
            percentage: percent(minutes, total),
        })
        .collect();
    buckets.sort_by(|a, b| b.minutes.cmp(&a.minutes).then(a.room_name.cmp(&b.room_name)));
    buckets.truncate(10);
    buckets
}

/// Minutes per subject, descending. Sessions without a subject are skipped.
pub fn by_subject(sessions: &[StudySession]) -> Vec<SubjectBucket> {
    let mut minutes_per_subject: HashMap<&str, u64> = HashMap::new();
    for session in sessions {
        if let Some(subject) = &session.subject {
            *minutes_per_subject.entry(subject.as_str()).or_default() +=
                session.duration_minutes();
        }
    }
    let total: u64 = minutes_per_subject.values().sum();

    let mut buckets: Vec<SubjectBucket> = minutes_per_subject
        .into_iter()
        .map(|(subject, minutes)| SubjectBucket {
            subject: subject.to_string(),
            minutes,
            percentage: percent(minutes, total),
        })
        .collect();
    buckets.sort_by(|a, b| b.minutes.cmp(&a.minutes).then(a.subject.cmp(&b.subject)));
    buckets
}
