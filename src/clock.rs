//! Repeating game timer
//!
//! The timer fires once per period, the first time one full period after it
//! was created. A late tick does not cause a burst of catch-up ticks: the
//! schedule restarts from the moment the late tick was seen.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Fires at a fixed period until cancelled
pub struct RepeatingTimer {
    interval: Interval,
    cancelled: watch::Receiver<bool>,
}

/// Stops the paired [`RepeatingTimer`]. Dropping the handle stops it as well.
#[derive(Debug)]
pub struct TimerHandle {
    cancel: watch::Sender<bool>,
}

impl RepeatingTimer {
    pub fn new(period: Duration) -> (Self, TimerHandle) {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let (cancel, cancelled) = watch::channel(false);
        (
            Self {
                interval,
                cancelled,
            },
            TimerHandle { cancel },
        )
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    /// Wait for the next tick.
    ///
    /// Returns `None` once the timer has been cancelled. Cancel safe, so it
    /// can sit in a `tokio::select!` loop.
    pub async fn tick(&mut self) -> Option<Instant> {
        if self.is_cancelled() {
            return None;
        }

        tokio::select! {
            instant = self.interval.tick() => Some(instant),
            _ = self.cancelled.changed() => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow() || self.cancelled.has_changed().is_err()
    }
}

impl TimerHandle {
    pub fn cancel(&self) {
        // No receiver left means the timer is already gone
        let _ = self.cancel.send(true);
    }
}
