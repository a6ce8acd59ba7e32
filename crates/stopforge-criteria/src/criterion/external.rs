//! External stop via a shared flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use stopforge_core::Cost;

use super::StoppingCriterion;

/// Stops when an external flag is set.
///
/// Lets another thread (a UI, a signal handler, a supervisor) end the search
/// through a [`StopHandle`]. The flag is only read, never cleared, by the
/// criterion.
///
/// # Example
///
/// ```
/// use stopforge_criteria::{ExternalStop, StoppingCriterion};
///
/// let mut criterion = ExternalStop::new();
/// let handle = criterion.handle();
///
/// assert!(!criterion.should_stop(3_i64));
/// std::thread::spawn(move || handle.stop()).join().unwrap();
/// assert!(criterion.should_stop(3_i64));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExternalStop {
    flag: Arc<AtomicBool>,
}

impl ExternalStop {
    /// Creates a criterion with a fresh, unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a criterion watching an existing flag.
    pub fn with_flag(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// Returns a handle that can request the stop from any thread.
    pub fn handle(&self) -> StopHandle {
        StopHandle {
            flag: Arc::clone(&self.flag),
        }
    }
}

impl<C: Cost> StoppingCriterion<C> for ExternalStop {
    #[inline]
    fn should_stop(&mut self, _best_cost: C) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Requests an [`ExternalStop`] to fire.
#[derive(Debug, Clone)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Clears a previous request, e.g. before resuming a paused search.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
