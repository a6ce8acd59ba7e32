//! Test utilities for stopforge-criteria
//!
//! Provides probe criteria and helpers shared by the crate's test modules.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use stopforge_core::Cost;

use crate::criterion::StoppingCriterion;

/// Criterion with a fixed answer that counts how often it is asked.
#[derive(Debug, Clone)]
pub struct ProbeCriterion {
    answer: bool,
    calls: Arc<AtomicU64>,
}

impl ProbeCriterion {
    /// Returns the probe and a counter observing its calls.
    pub fn new(answer: bool) -> (Self, CallCounter) {
        let calls = Arc::new(AtomicU64::new(0));
        let counter = CallCounter {
            calls: Arc::clone(&calls),
        };
        (Self { answer, calls }, counter)
    }
}

impl<C: Cost> StoppingCriterion<C> for ProbeCriterion {
    fn should_stop(&mut self, _best_cost: C) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.answer
    }
}

#[derive(Debug, Clone)]
pub struct CallCounter {
    calls: Arc<AtomicU64>,
}

impl CallCounter {
    pub fn get(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

/// Feeds `costs` to `criterion` and collects the answers.
pub fn answers<C: Cost, S: StoppingCriterion<C> + ?Sized>(
    criterion: &mut S,
    costs: &[C],
) -> Vec<bool> {
    costs
        .iter()
        .map(|&cost| criterion.should_stop(cost))
        .collect()
}

/// Calls `criterion` `n` times with a constant cost.
pub fn answers_n<S: StoppingCriterion<u64> + ?Sized>(criterion: &mut S, n: usize) -> Vec<bool> {
    answers(criterion, &vec![0_u64; n])
}
