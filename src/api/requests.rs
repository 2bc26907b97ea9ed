//! API request structures

use serde::Deserialize;

use crate::analytics::Period;
use crate::state::{DisplayStyle, GoalKind, RoomPreset};
use crate::timer::{TimerMode, TimerSnapshot};

fn default_max_participants() -> usize {
    10
}

/// Longest user-selectable countdown, in minutes.
const MAX_CUSTOM_MINUTES: u64 = 120;

fn validate_mode(mode: &TimerMode) -> Result<(), &'static str> {
    if let TimerMode::Custom(minutes) = mode {
        if !(1..=MAX_CUSTOM_MINUTES).contains(minutes) {
            return Err("custom duration must be between 1 and 120 minutes");
        }
    }
    Ok(())
}

/// Body for POST /rooms
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub preset: RoomPreset,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default = "default_max_participants")]
    pub max_participants: usize,
}

impl CreateRoomRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("room name must not be empty");
        }
        if !(1..=50).contains(&self.max_participants) {
            return Err("max participants must be between 1 and 50");
        }
        Ok(())
    }
}

/// Body for POST /rooms/:id/join and /leave
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantRequest {
    pub name: String,
}

/// Body for POST /rooms/:id/timer/configure
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigureTimerRequest {
    #[serde(flatten)]
    pub mode: TimerMode,
    #[serde(default)]
    pub display_style: Option<DisplayStyle>,
    /// Subject stamped onto future session records; an empty string clears it
    #[serde(default)]
    pub subject: Option<String>,
}

impl ConfigureTimerRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        validate_mode(&self.mode)
    }
}

/// Body for POST /rooms/:id/timer/restore
#[derive(Debug, Clone, Deserialize)]
pub struct RestoreTimerRequest {
    pub snapshot: TimerSnapshot,
}

impl RestoreTimerRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        // A snapshot carries a mode too; hold it to the same bound
        validate_mode(&self.snapshot.mode)
    }
}

/// Body for PUT /rooms/:id/goal
#[derive(Debug, Clone, Deserialize)]
pub struct GoalRequest {
    pub kind: GoalKind,
    #[serde(default)]
    pub target: u64,
}

impl GoalRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.kind != GoalKind::None && self.target == 0 {
            return Err("goal target must be a positive number");
        }
        Ok(())
    }
}

/// Body for POST /rooms/:id/score
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScoreRequest {
    pub points: u64,
}

impl ScoreRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.points > 1000 {
            return Err("score must be between 0 and 1000");
        }
        Ok(())
    }
}

/// Query string for GET /rooms
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

/// Query string shared by the analytics endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PeriodQuery {
    pub period: Option<String>,
}

impl PeriodQuery {
    /// Resolve the requested period, defaulting to a week.
    pub fn resolve(&self) -> Result<Period, &'static str> {
        match &self.period {
            None => Ok(Period::default()),
            Some(value) => Period::parse(value).ok_or("period must be week, month, or all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_request_parses_flattened_mode() {
        let req: ConfigureTimerRequest =
            serde_json::from_str(r#"{"mode":"custom","custom_minutes":30}"#).unwrap();
        assert_eq!(req.mode, TimerMode::Custom(30));

        let req: ConfigureTimerRequest = serde_json::from_str(r#"{"mode":"pomodoro"}"#).unwrap();
        assert_eq!(req.mode, TimerMode::Pomodoro);

        let req: ConfigureTimerRequest =
            serde_json::from_str(r#"{"mode":"unlimited","display_style":"bar"}"#).unwrap();
        assert_eq!(req.mode, TimerMode::Unlimited);
        assert_eq!(req.display_style, Some(DisplayStyle::Bar));
    }

    #[test]
    fn custom_minutes_must_stay_in_bounds() {
        let parse = |minutes: u64| -> ConfigureTimerRequest {
            serde_json::from_str(&format!(r#"{{"mode":"custom","custom_minutes":{minutes}}}"#))
                .unwrap()
        };

        assert!(parse(0).validate().is_err());
        assert!(parse(1).validate().is_ok());
        assert!(parse(120).validate().is_ok());
        assert!(parse(121).validate().is_err());
        assert!(parse(u64::MAX).validate().is_err());
    }

    #[test]
    fn restored_snapshot_mode_is_bounded_too() {
        let req: RestoreTimerRequest = serde_json::from_str(&format!(
            r#"{{"snapshot":{{"mode":"custom","custom_minutes":{},"counter":450,"running":false}}}}"#,
            u64::MAX
        ))
        .unwrap();
        assert!(req.validate().is_err());

        let req: RestoreTimerRequest = serde_json::from_str(
            r#"{"snapshot":{"mode":"pomodoro","counter":450,"running":false}}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn room_request_bounds() {
        let mut req = CreateRoomRequest {
            name: "Hall".to_string(),
            description: None,
            preset: RoomPreset::Study,
            is_private: false,
            max_participants: 10,
        };
        assert!(req.validate().is_ok());

        req.max_participants = 0;
        assert!(req.validate().is_err());
        req.max_participants = 51;
        assert!(req.validate().is_err());

        req.max_participants = 10;
        req.name = "   ".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn period_query_defaults_to_week() {
        assert_eq!(PeriodQuery::default().resolve().unwrap(), Period::Week);
        let query = PeriodQuery {
            period: Some("decade".to_string()),
        };
        assert!(query.resolve().is_err());
    }
}
