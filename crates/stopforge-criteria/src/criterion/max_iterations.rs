//! Iteration count stopping criterion.

use stopforge_core::{Cost, Result, StopForgeError};
use tracing::debug;

use super::StoppingCriterion;

/// Stops after a number of evaluations.
///
/// Every call counts, including the one that returns `true`: with a budget of
/// `n`, calls `1..n` return `false` and call `n` returns `true`. The answer
/// stays `true` on later calls.
///
/// # Example
///
/// ```
/// use stopforge_criteria::{MaxIterations, StoppingCriterion};
///
/// let mut criterion = MaxIterations::new(3).unwrap();
/// let answers: Vec<bool> = (0..4).map(|_| criterion.should_stop(0_u64)).collect();
///
/// assert_eq!(answers, [false, false, true, true]);
/// ```
#[derive(Debug, Clone)]
pub struct MaxIterations {
    budget: u64,
    iterations: u64,
}

impl MaxIterations {
    /// Creates a criterion that stops on the `budget`-th call.
    ///
    /// # Errors
    ///
    /// Returns [`StopForgeError::InvalidParameter`] if `budget` is zero.
    pub fn new(budget: u64) -> Result<Self> {
        if budget == 0 {
            return Err(StopForgeError::invalid_parameter(
                "max iterations must be at least 1, got 0",
            ));
        }
        Ok(Self {
            budget,
            iterations: 0,
        })
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    /// Number of calls seen so far.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}

impl<C: Cost> StoppingCriterion<C> for MaxIterations {
    #[inline]
    fn should_stop(&mut self, _best_cost: C) -> bool {
        self.iterations = self.iterations.saturating_add(1);
        if self.iterations == self.budget {
            debug!(budget = self.budget, "Iteration budget reached");
        }
        self.iterations >= self.budget
    }
}
