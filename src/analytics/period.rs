//! Reporting periods

use chrono::{DateTime, Duration, Utc};

/// Date range selector shared by all analytics endpoints.
///
/// "All" is bounded at 90 days, a reasonable limit for in-memory charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Week,
    Month,
    All,
}

impl Period {
    /// Number of days the period spans
    pub fn days(self) -> u64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::All => 90,
        }
    }

    /// Start of the period, counting back from `now`
    pub fn start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.days() as i64)
    }

    /// Start of the immediately preceding period of equal length
    pub fn previous_start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.start(now) - Duration::days(self.days() as i64)
    }

    /// Parse a query-string value. "year" is accepted as an alias for the
    /// bounded all-time view.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "all" | "year" => Some(Self::All),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::All => "all",
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::Week
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_values() {
        assert_eq!(Period::parse("week"), Some(Period::Week));
        assert_eq!(Period::parse("Month"), Some(Period::Month));
        assert_eq!(Period::parse("all"), Some(Period::All));
        assert_eq!(Period::parse("year"), Some(Period::All));
        assert_eq!(Period::parse("fortnight"), None);
    }

    #[test]
    fn previous_period_is_adjacent() {
        let now = Utc::now();
        let period = Period::Week;
        assert_eq!(period.previous_start(now), now - Duration::days(14));
        assert_eq!(period.start(now), now - Duration::days(7));
    }
}
