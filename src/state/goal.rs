//! Study goal tracking
//!
//! A room can carry one goal. The current value is always derived from the
//! room's aggregates, never stored on the goal itself.

use serde::{Deserialize, Serialize};

/// What a goal measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    /// Total study time, target in minutes
    Time,
    /// Completed sessions, target count
    Sessions,
    /// Exam score, target points
    Score,
    /// Study without a specific target
    None,
}

/// A room's configured goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Goal {
    pub kind: GoalKind,
    pub target: u64,
}

impl Goal {
    pub fn none() -> Self {
        Self {
            kind: GoalKind::None,
            target: 0,
        }
    }

    pub fn new(kind: GoalKind, target: u64) -> Self {
        match kind {
            GoalKind::None => Self::none(),
            kind => Self { kind, target },
        }
    }

    /// Evaluate the goal against a derived current value.
    pub fn evaluate(&self, current: u64) -> GoalProgress {
        let percentage = if self.kind == GoalKind::None || self.target == 0 {
            0
        } else {
            ((current * 100) / self.target).min(100)
        };

        GoalProgress {
            kind: self.kind,
            target: self.target,
            current,
            percentage,
            completed: self.kind != GoalKind::None && current >= self.target,
        }
    }
}

impl Default for Goal {
    fn default() -> Self {
        Self::none()
    }
}

/// Snapshot of goal progress for client display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoalProgress {
    pub kind: GoalKind,
    pub target: u64,
    pub current: u64,
    /// Completed share, clamped to 100
    pub percentage: u64,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_goal_reports_zero_progress() {
        let progress = Goal::none().evaluate(500);
        assert_eq!(progress.percentage, 0);
        assert!(!progress.completed);
    }

    #[test]
    fn time_goal_progress_is_clamped() {
        let goal = Goal::new(GoalKind::Time, 60);

        assert_eq!(goal.evaluate(30).percentage, 50);
        assert_eq!(goal.evaluate(90).percentage, 100);
        assert!(goal.evaluate(60).completed);
        assert!(!goal.evaluate(59).completed);
    }

    #[test]
    fn sessions_goal_completes_at_target() {
        let goal = Goal::new(GoalKind::Sessions, 3);
        assert!(!goal.evaluate(2).completed);
        assert!(goal.evaluate(3).completed);
    }

    #[test]
    fn none_kind_discards_target() {
        let goal = Goal::new(GoalKind::None, 42);
        assert_eq!(goal.target, 0);
    }
}
