//! Time sources for time-based criteria.
//!
//! Criteria never call `Instant::now()` directly. They read a [`Clock`], which
//! reports the time elapsed since the clock's own epoch. [`MonotonicClock`]
//! is the production source; [`ManualClock`] is advanced by hand so tests can
//! simulate elapsed time without sleeping.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock: Send + Sync + Debug {
    /// Returns the time elapsed since this clock's epoch. Never decreases.
    fn now(&self) -> Duration;
}

/// Clock backed by [`Instant`], unaffected by system clock adjustments.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same reading, so a test can hand one clone to a
/// criterion and keep another to advance time.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use stopforge_core::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let observer = clock.clone();
///
/// clock.advance(Duration::from_millis(1500));
/// assert_eq!(observer.now(), Duration::from_millis(1500));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward. Saturates at `u64::MAX` nanoseconds.
    pub fn advance(&self, by: Duration) {
        let by = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        // fetch_update never fails with a closure that always returns Some
        let _ = self
            .nanos
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some(current.saturating_add(by))
            });
    }

    /// Moves the clock forward by a number of seconds.
    ///
    /// # Panics
    ///
    /// Panics if `secs` is negative or not finite.
    pub fn advance_secs(&self, secs: f64) {
        self.advance(Duration::from_secs_f64(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::Acquire))
    }
}

impl<K: Clock + ?Sized> Clock for Arc<K> {
    fn now(&self) -> Duration {
        (**self).now()
    }
}
