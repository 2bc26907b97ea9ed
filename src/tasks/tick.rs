//! Periodic timer tick background task

use std::{sync::Arc, time::Duration};

use tokio::time::{interval, sleep, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Drive every room timer forward once per second.
///
/// Each tick is synchronous: the engines advance and their completion
/// events are folded into room aggregates before the rooms lock is
/// released, then the resulting session records are appended to the log.
/// Cancellation is simply dropping the task on shutdown; no tick is ever
/// left half-applied.
pub async fn timer_tick_task(state: Arc<AppState>) {
    info!("Starting timer tick task");

    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let recorded = match state.tick_all() {
            Ok(recorded) => recorded,
            Err(e) => {
                error!("Failed to tick room timers: {}", e);
                // Back off before retrying the poisoned lock
                sleep(Duration::from_secs(1)).await;
                continue;
            }
        };

        if recorded.is_empty() {
            continue;
        }

        debug!("Tick produced {} completed session(s)", recorded.len());
        if let Err(e) = state.record_sessions(recorded) {
            error!("Failed to record completed sessions: {}", e);
        }
    }
}
