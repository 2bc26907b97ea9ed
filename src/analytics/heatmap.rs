//! Weekday-by-hour study heatmap

use chrono::{Datelike, Timelike};
use serde::Serialize;

use crate::state::StudySession;

/// One cell of the 7x24 grid. `day` follows the source convention of
/// 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HeatmapCell {
    pub day: u32,
    pub hour: u32,
    pub minutes: u64,
    pub count: u64,
}

/// The full grid plus the maximum cell value, used client-side for
/// intensity scaling.
#[derive(Debug, Clone, Serialize)]
pub struct Heatmap {
    pub cells: Vec<HeatmapCell>,
    pub max_minutes: u64,
}

/// Aggregate sessions into the 7x24 grid.
pub fn build_heatmap(sessions: &[StudySession]) -> Heatmap {
    let mut cells: Vec<HeatmapCell> = (0..7)
        .flat_map(|day| {
            (0..24).map(move |hour| HeatmapCell {
                day,
                hour,
                minutes: 0,
                count: 0,
            })
        })
        .collect();

    let mut max_minutes = 0;
    for session in sessions {
        let day = session.completed_at.weekday().num_days_from_sunday();
        let hour = session.completed_at.hour();
        let cell = &mut cells[(day * 24 + hour) as usize];
        cell.minutes += session.duration_minutes();
        cell.count += 1;
        max_minutes = max_minutes.max(cell.minutes);
    }

    Heatmap { cells, max_minutes }
}
