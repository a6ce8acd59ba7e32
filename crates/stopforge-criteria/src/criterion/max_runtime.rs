//! Wall-clock stopping criterion.

use std::time::Duration;

use stopforge_core::{Clock, Cost, MonotonicClock, Result, StopForgeError};

use super::StoppingCriterion;

/// Stops once a wall-clock budget has elapsed.
///
/// The start instant is captured when the criterion is constructed, so build
/// it right before the search loop. Time is read from a monotonic [`Clock`];
/// the default [`MonotonicClock`] ignores system clock adjustments.
///
/// Once this criterion returns `true` it keeps returning `true`.
///
/// Clones keep the original start instant, which makes a cloned `MaxRuntime`
/// a shared deadline for parallel workers.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use stopforge_criteria::{ManualClock, MaxRuntime, StoppingCriterion};
///
/// let clock = ManualClock::new();
/// let mut criterion = MaxRuntime::with_clock(2.0, clock.clone()).unwrap();
///
/// assert!(!criterion.should_stop(10));
/// clock.advance(Duration::from_secs(2));
/// assert!(criterion.should_stop(10));
/// ```
#[derive(Debug, Clone)]
pub struct MaxRuntime<K: Clock = MonotonicClock> {
    budget: Duration,
    start: Duration,
    clock: K,
}

impl MaxRuntime<MonotonicClock> {
    /// Creates a criterion with a budget in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`StopForgeError::InvalidParameter`] if `seconds` is not
    /// strictly positive or not finite.
    pub fn new(seconds: f64) -> Result<Self> {
        Self::with_clock(seconds, MonotonicClock::new())
    }

    /// Creates a criterion from a non-zero duration.
    pub fn from_duration(budget: Duration) -> Result<Self> {
        Self::from_duration_with_clock(budget, MonotonicClock::new())
    }
}

impl<K: Clock> MaxRuntime<K> {
    /// Creates a criterion with a budget in seconds, reading time from `clock`.
    pub fn with_clock(seconds: f64, clock: K) -> Result<Self> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(StopForgeError::invalid_parameter(format!(
                "max runtime must be a positive number of seconds, got {seconds}"
            )));
        }
        // Budgets beyond Duration's range can never be reached anyway, and
        // sub-nanosecond ones must not round down to zero.
        let budget = Duration::try_from_secs_f64(seconds)
            .unwrap_or(Duration::MAX)
            .max(Duration::from_nanos(1));
        Ok(Self::start(budget, clock))
    }

    /// Creates a criterion from a non-zero duration, reading time from `clock`.
    pub fn from_duration_with_clock(budget: Duration, clock: K) -> Result<Self> {
        if budget.is_zero() {
            return Err(StopForgeError::invalid_parameter(
                "max runtime must be a positive duration, got 0s",
            ));
        }
        Ok(Self::start(budget, clock))
    }

    fn start(budget: Duration, clock: K) -> Self {
        let start = clock.now();
        Self {
            budget,
            start,
            clock,
        }
    }

    /// Returns the configured budget.
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Returns the time elapsed since construction.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.start)
    }

    /// Returns the time left before the budget is spent.
    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.elapsed())
    }
}

impl<C: Cost, K: Clock> StoppingCriterion<C> for MaxRuntime<K> {
    #[inline]
    fn should_stop(&mut self, _best_cost: C) -> bool {
        self.elapsed() >= self.budget
    }
}
