//! Clock sources and the cancellable error-reset timer.

use chrono::{DateTime, TimeDelta, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Time source used for scheduling resets and stamping history.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a test can keep a handle while the
/// engine owns another.
///
/// # Example
///
/// ```rust
/// use abacus::effects::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::starting_now();
/// let handle = clock.clone();
/// let before = clock.now();
///
/// handle.advance(Duration::from_millis(3000));
/// assert_eq!((clock.now() - before).num_milliseconds(), 3000);
/// ```
#[derive(Clone, Debug)]
pub struct ManualClock {
    millis: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(start.timestamp_millis())),
        }
    }

    pub fn starting_now() -> Self {
        Self::new(Utc::now())
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        let delta = i64::try_from(by.as_millis()).unwrap_or(i64::MAX);
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }

    /// Jump to an absolute time.
    pub fn set(&self, at: DateTime<Utc>) {
        self.millis.store(at.timestamp_millis(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.millis.load(Ordering::SeqCst)).unwrap_or_default()
    }
}

/// A scheduled return from the error display to normal entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingReset {
    pub scheduled_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
}

impl PendingReset {
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now >= self.due_at
    }
}

/// Holds at most one pending reset.
#[derive(Clone, Debug, Default)]
pub(crate) struct ResetTimer {
    pending: Option<PendingReset>,
}

impl ResetTimer {
    /// Schedule a reset `delay` after `now`, replacing any earlier one.
    pub(crate) fn schedule(&mut self, now: DateTime<Utc>, delay: Duration) -> PendingReset {
        let due_at = TimeDelta::from_std(delay)
            .ok()
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let pending = PendingReset {
            scheduled_at: now,
            due_at,
        };
        self.pending = Some(pending);
        pending
    }

    /// Drop the pending reset. Returns whether one was pending.
    pub(crate) fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Consume the pending reset if its deadline has passed.
    pub(crate) fn fire_if_due(&mut self, now: DateTime<Utc>) -> bool {
        match self.pending {
            Some(pending) if pending.is_due(now) => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn pending(&self) -> Option<&PendingReset> {
        self.pending.as_ref()
    }
}
