//! Countdown / count-up timer state machine

use serde::{Deserialize, Serialize};

/// Length of a classic pomodoro work interval in seconds.
pub const POMODORO_SECONDS: u64 = 25 * 60;

/// Default interval at which a long-running unlimited session is chunked
/// into fixed-size session records.
pub const DEFAULT_CHUNK_SECONDS: u64 = 25 * 60;

/// Rolling cycle used for the unlimited-mode progress indicator.
pub const PROGRESS_CYCLE_SECONDS: u64 = 5 * 60;

/// Timer mode selected for a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "custom_minutes", rename_all = "lowercase")]
pub enum TimerMode {
    /// Fixed 25-minute countdown
    Pomodoro,
    /// User-defined countdown, in minutes
    Custom(u64),
    /// Open-ended count-up
    Unlimited,
}

impl TimerMode {
    /// Total countdown duration in seconds, `None` for unlimited mode.
    ///
    /// Saturates rather than overflowing on absurd custom durations; the
    /// API layer bounds user input well below that.
    pub fn total_seconds(&self) -> Option<u64> {
        match self {
            Self::Pomodoro => Some(POMODORO_SECONDS),
            Self::Custom(minutes) => Some(minutes.saturating_mul(60)),
            Self::Unlimited => None,
        }
    }

    /// Whether this mode counts down toward zero.
    pub fn is_countdown(&self) -> bool {
        !matches!(self, Self::Unlimited)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pomodoro => "pomodoro",
            Self::Custom(_) => "custom",
            Self::Unlimited => "unlimited",
        }
    }
}

impl std::fmt::Display for TimerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Custom(minutes) => write!(f, "custom ({minutes}m)"),
            other => write!(f, "{}", other.label()),
        }
    }
}

/// Event emitted by the engine and forwarded by its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One completed interval of tracked study time, in seconds.
    SessionComplete { seconds: u64 },
    /// Incremental time accumulated in unlimited mode, always one second.
    TimeUpdate { seconds: u64 },
}

/// Serializable engine state, taken by the host and handed back to
/// [`TimerEngine::from_snapshot`] to survive a client reload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimerSnapshot {
    #[serde(flatten)]
    pub mode: TimerMode,
    /// Remaining seconds for countdown modes, elapsed seconds for unlimited.
    pub counter: u64,
    pub running: bool,
}

/// The timer state machine.
///
/// `counter` holds remaining seconds in countdown modes and elapsed seconds
/// in unlimited mode. All mutating operations return the events they caused;
/// the engine itself never performs I/O and cannot fail.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    mode: TimerMode,
    counter: u64,
    running: bool,
    chunk_seconds: u64,
}

impl TimerEngine {
    /// Create a fresh, stopped engine for the given mode.
    pub fn new(mode: TimerMode) -> Self {
        Self::with_chunk(mode, DEFAULT_CHUNK_SECONDS)
    }

    /// Create an engine with a non-default unlimited-mode chunk interval.
    pub fn with_chunk(mode: TimerMode, chunk_seconds: u64) -> Self {
        Self {
            mode,
            counter: mode.total_seconds().unwrap_or(0),
            running: false,
            chunk_seconds: chunk_seconds.max(1),
        }
    }

    /// Rebuild an engine from a previously taken snapshot.
    ///
    /// The restored engine is never running; the host restarts it explicitly.
    pub fn from_snapshot(snapshot: TimerSnapshot, chunk_seconds: u64) -> Self {
        let bound = snapshot.mode.total_seconds();
        Self {
            mode: snapshot.mode,
            counter: bound.map_or(snapshot.counter, |total| snapshot.counter.min(total)),
            running: false,
            chunk_seconds: chunk_seconds.max(1),
        }
    }

    /// Take a snapshot of the current state.
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            counter: self.counter,
            running: self.running,
        }
    }

    /// Reinitialize for the given mode: counter back to the mode's initial
    /// value, running forced off. Discards any previous custom duration.
    pub fn configure(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.counter = mode.total_seconds().unwrap_or(0);
        self.running = false;
    }

    /// Start or resume. Idempotent while running; a countdown that already
    /// reached zero stays stopped until reset.
    pub fn start(&mut self) {
        if self.mode.is_countdown() && self.counter == 0 {
            return;
        }
        self.running = true;
    }

    /// Stop advancing. An unlimited session with accumulated time reports it
    /// as a completed session so partial free-run time is never lost.
    pub fn pause(&mut self) -> Vec<TimerEvent> {
        self.running = false;
        let mut events = Vec::new();
        if self.mode == TimerMode::Unlimited && self.counter > 0 {
            events.push(TimerEvent::SessionComplete { seconds: self.counter });
        }
        events
    }

    /// Restore the configured initial state. Unlimited mode first reports
    /// accumulated time exactly like [`pause`](Self::pause).
    pub fn reset(&mut self) -> Vec<TimerEvent> {
        let events = self.pause();
        self.counter = self.mode.total_seconds().unwrap_or(0);
        events
    }

    /// Advance the logical clock by one second. No-op unless running.
    pub fn tick(&mut self) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        if !self.running {
            return events;
        }

        match self.mode {
            TimerMode::Pomodoro | TimerMode::Custom(_) => {
                self.counter = self.counter.saturating_sub(1);
                if self.counter == 0 {
                    self.running = false;
                    // total_seconds is Some for countdown modes
                    if let Some(total) = self.mode.total_seconds() {
                        events.push(TimerEvent::SessionComplete { seconds: total });
                    }
                }
            }
            TimerMode::Unlimited => {
                self.counter += 1;
                events.push(TimerEvent::TimeUpdate { seconds: 1 });
                if self.counter % self.chunk_seconds == 0 {
                    events.push(TimerEvent::SessionComplete {
                        seconds: self.chunk_seconds,
                    });
                }
            }
        }

        events
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining seconds for countdown modes, `None` for unlimited.
    pub fn remaining_seconds(&self) -> Option<u64> {
        self.mode.is_countdown().then_some(self.counter)
    }

    /// Elapsed seconds for unlimited mode, `None` for countdowns.
    pub fn elapsed_seconds(&self) -> Option<u64> {
        (!self.mode.is_countdown()).then_some(self.counter)
    }

    /// Progress fraction in 0.0..=1.0.
    ///
    /// Countdowns report completed share of the configured duration.
    /// Unlimited mode reports a rolling 5-minute display cycle with no
    /// semantic meaning beyond animating motion.
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        match self.mode.total_seconds() {
            Some(0) => 1.0,
            Some(total) => (total - self.counter) as f64 / total as f64,
            None => {
                (self.counter % PROGRESS_CYCLE_SECONDS) as f64 / PROGRESS_CYCLE_SECONDS as f64
            }
        }
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(TimerMode::Pomodoro)
    }
}
