//! Tokio driver for the scheduler clock and store polling

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};

use super::documents::DocumentStore;
use super::scheduler::DeferredScheduler;

/// Tick the scheduler with real elapsed time and refresh the store at
/// `refresh_every`, until `done` returns `true` or `limit` elapses.
///
/// Returns `true` if `done` was satisfied, `false` on timeout.
pub async fn drive_until<F>(
    scheduler: &Mutex<DeferredScheduler>,
    store: &DocumentStore,
    tick: Duration,
    refresh_every: Duration,
    limit: Duration,
    mut done: F,
) -> bool
where
    F: FnMut(&DocumentStore) -> bool,
{
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let started = Instant::now();
    let mut last_tick = started;
    let mut last_refresh = started;

    loop {
        ticker.tick().await;
        let now = Instant::now();

        let ran = scheduler
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .advance(now - last_tick);
        last_tick = now;
        if ran > 0 {
            log::debug!("Scheduler ran {ran} jobs");
        }

        if now - last_refresh >= refresh_every {
            store.refresh();
            last_refresh = now;
        }

        if done(store) {
            return true;
        }
        if now - started >= limit {
            log::warn!("Stopped driving scheduler after {limit:?}");
            return false;
        }
    }
}
