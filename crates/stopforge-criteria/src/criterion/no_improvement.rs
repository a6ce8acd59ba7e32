//! Stopping criterion based on lack of improvement.

use stopforge_core::{Cost, Result, StopForgeError};
use tracing::debug;

use super::StoppingCriterion;

/// Stops after `patience` consecutive calls without a strictly lower cost.
///
/// The first call only records a baseline and returns `false`; calls before
/// the first comparable cost (e.g. a leading NaN) do the same. Afterwards a
/// cost strictly below the best one seen resets the streak; anything else,
/// including a regression or an incomparable value such as NaN, extends it.
///
/// An improving call after a `true` answer resets the streak, so this
/// criterion can return `false` again.
///
/// # Example
///
/// ```
/// use stopforge_criteria::{NoImprovement, StoppingCriterion};
///
/// let mut criterion = NoImprovement::new(2).unwrap();
/// let answers: Vec<bool> = [10, 9, 10, 10]
///     .into_iter()
///     .map(|cost| criterion.should_stop(cost))
///     .collect();
///
/// assert_eq!(answers, [false, false, false, true]);
/// ```
#[derive(Debug, Clone)]
pub struct NoImprovement<C: Cost> {
    patience: u64,
    best_cost: Option<C>,
    streak: u64,
}

impl<C: Cost> NoImprovement<C> {
    /// Creates a criterion tolerating `patience` non-improving calls.
    ///
    /// # Errors
    ///
    /// Returns [`StopForgeError::InvalidParameter`] if `patience` is zero.
    pub fn new(patience: u64) -> Result<Self> {
        if patience == 0 {
            return Err(StopForgeError::invalid_parameter(
                "no-improvement patience must be at least 1, got 0",
            ));
        }
        Ok(Self {
            patience,
            best_cost: None,
            streak: 0,
        })
    }

    pub fn patience(&self) -> u64 {
        self.patience
    }

    /// Best cost observed so far, `None` before the first call.
    pub fn best_cost(&self) -> Option<C> {
        self.best_cost
    }

    /// Current number of consecutive non-improving calls.
    pub fn streak(&self) -> u64 {
        self.streak
    }
}

impl<C: Cost> StoppingCriterion<C> for NoImprovement<C> {
    fn should_stop(&mut self, best_cost: C) -> bool {
        match self.best_cost {
            None => {
                // NaN is never a baseline: nothing could compare below it.
                if best_cost.partial_cmp(&best_cost).is_some() {
                    self.best_cost = Some(best_cost);
                }
                return false;
            }
            Some(best) if best_cost < best => {
                self.best_cost = Some(best_cost);
                self.streak = 0;
            }
            Some(_) => {
                self.streak = self.streak.saturating_add(1);
                if self.streak == self.patience {
                    debug!(
                        patience = self.patience,
                        best_cost = ?self.best_cost,
                        "No improvement within patience"
                    );
                }
            }
        }
        self.streak >= self.patience
    }
}
