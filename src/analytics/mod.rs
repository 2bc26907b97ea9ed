//! Read-only aggregation over the session log
//!
//! Pure arithmetic on already-fetched session records; nothing in here
//! touches state or performs I/O.

pub mod distribution;
pub mod heatmap;
pub mod period;
pub mod score;
pub mod summary;

// Re-export main types
pub use distribution::{by_day, by_hour, by_room, by_subject};
pub use distribution::{DayBucket, HourBucket, RoomBucket, SubjectBucket};
pub use heatmap::{build_heatmap, Heatmap, HeatmapCell};
pub use period::Period;
pub use score::{compare_periods, period_metrics, PeriodMetrics, ScoreComparison};
pub use summary::{summarize, BestDay, Summary};
