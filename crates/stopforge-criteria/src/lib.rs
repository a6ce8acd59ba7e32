//! StopForge stopping criteria
//!
//! This crate decides when an iterative search should stop:
//! - The [`StoppingCriterion`] trait consulted once per iteration
//! - Leaf criteria (wall-clock, iteration count, no improvement, external flag)
//! - AND/OR/NOT combinators that nest into arbitrary trees
//! - Configuration wiring (builder module)
//!
//! # Example
//!
//! ```
//! use stopforge_criteria::{MaxIterations, MaxRuntime, StoppingCriterion, StoppingCriterionExt};
//!
//! let mut criterion = MaxIterations::new(3)
//!     .unwrap()
//!     .or(MaxRuntime::new(60.0).unwrap());
//!
//! let mut best_cost = 100_u64;
//! let mut iterations = 0;
//! while !criterion.should_stop(best_cost) {
//!     best_cost -= 1;
//!     iterations += 1;
//! }
//! assert_eq!(iterations, 2);
//! ```

pub mod builder;
pub mod criterion;

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
pub(crate) mod test_utils;

pub use builder::CriterionBuilder;
pub use criterion::{
    And, BoxedCriterion, ExternalStop, MaxIterations, MaxRuntime, NoImprovement, Not, Or,
    StopHandle, StoppingCriterion, StoppingCriterionExt,
};
pub use stopforge_core::{Clock, Cost, ManualClock, MonotonicClock, Result, StopForgeError};
