//! Best-cost trajectories.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `len` copies of the same cost.
pub fn plateau(cost: u64, len: usize) -> Vec<u64> {
    vec![cost; len]
}

/// A strictly improving trajectory: `start`, `start - step`, ...
///
/// Stops early rather than going below zero.
pub fn descending(start: u64, step: u64, len: usize) -> Vec<u64> {
    (0..len as u64)
        .map_while(|i| step.checked_mul(i).and_then(|d| start.checked_sub(d)))
        .collect()
}

/// Improves for `improving` calls, then stays flat for `flat` calls.
///
/// # Examples
///
/// ```
/// use stopforge_test::stalls_after;
///
/// assert_eq!(stalls_after(100, 3, 2), vec![100, 99, 98, 98, 98]);
/// ```
pub fn stalls_after(start: u64, improving: usize, flat: usize) -> Vec<u64> {
    let mut costs = descending(start, 1, improving);
    let last = costs.last().copied().unwrap_or(start);
    costs.extend(std::iter::repeat(last).take(flat));
    costs
}

/// A reproducible noisy trajectory of non-negative costs.
///
/// Each step moves the cost by a random amount in `-spread..=spread`, so the
/// sequence both improves and regresses, like a search that diversifies.
pub fn random_walk(seed: u64, start: u64, spread: u64, len: usize) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cost = start;
    (0..len)
        .map(|_| {
            let current = cost;
            let delta = rng.random_range(0..=2 * spread);
            cost = (cost + delta).saturating_sub(spread);
            current
        })
        .collect()
}
