//! Stopping criteria for iterative search loops.

mod composite;
mod external;
mod max_iterations;
mod max_runtime;
mod no_improvement;

use std::fmt::Debug;

use stopforge_core::Cost;

pub use composite::{And, Not, Or};
pub use external::{ExternalStop, StopHandle};
pub use max_iterations::MaxIterations;
pub use max_runtime::MaxRuntime;
pub use no_improvement::NoImprovement;

/// Trait for deciding when to stop searching.
///
/// The search loop calls [`should_stop`](Self::should_stop) once per
/// iteration with the best cost found so far and ends the loop on `true`.
/// Implementations only mutate their own bookkeeping and never fail once
/// constructed; all parameter validation happens in constructors.
///
/// Calling again after `true` is allowed. Each criterion documents what it
/// answers in that case.
///
/// # Type Parameters
/// * `C` - The cost type reported by the search
pub trait StoppingCriterion<C: Cost>: Send + Debug {
    /// Returns true if the search should terminate.
    fn should_stop(&mut self, best_cost: C) -> bool;
}

/// A type-erased criterion, as produced by the configuration builder.
pub type BoxedCriterion<C> = Box<dyn StoppingCriterion<C>>;

impl<C: Cost, T: StoppingCriterion<C> + ?Sized> StoppingCriterion<C> for Box<T> {
    #[inline]
    fn should_stop(&mut self, best_cost: C) -> bool {
        (**self).should_stop(best_cost)
    }
}

impl<C: Cost, T: StoppingCriterion<C> + ?Sized> StoppingCriterion<C> for &mut T {
    #[inline]
    fn should_stop(&mut self, best_cost: C) -> bool {
        (**self).should_stop(best_cost)
    }
}

/// Combinator helpers available on every criterion.
///
/// # Example
///
/// ```
/// use stopforge_criteria::{MaxIterations, NoImprovement, StoppingCriterion, StoppingCriterionExt};
///
/// // Run at least 2 iterations, then stop once the cost stalls.
/// let mut criterion = MaxIterations::new(2)
///     .unwrap()
///     .and(NoImprovement::new(1).unwrap());
///
/// assert!(!criterion.should_stop(5.0));
/// assert!(criterion.should_stop(5.0));
/// ```
pub trait StoppingCriterionExt<C: Cost>: StoppingCriterion<C> + Sized + 'static {
    /// Stops when both `self` and `other` stop.
    fn and<O: StoppingCriterion<C> + 'static>(self, other: O) -> And<C> {
        And::pair(self.boxed(), other.boxed())
    }

    /// Stops when either `self` or `other` stops.
    fn or<O: StoppingCriterion<C> + 'static>(self, other: O) -> Or<C> {
        Or::pair(self.boxed(), other.boxed())
    }

    /// Stops exactly when `self` would continue.
    fn not(self) -> Not<Self, C> {
        Not::new(self)
    }

    /// Erases the concrete type.
    fn boxed(self) -> BoxedCriterion<C> {
        Box::new(self)
    }
}

impl<C: Cost, T: StoppingCriterion<C> + 'static> StoppingCriterionExt<C> for T {}
