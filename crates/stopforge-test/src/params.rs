//! Reproducible parameter samples.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `n` strictly positive counts, always including 1 and `u64::MAX`.
pub fn positive_counts(seed: u64, n: usize) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut counts = vec![1, u64::MAX];
    counts.extend((0..n).map(|_| rng.random_range(1..=u64::MAX)));
    counts
}

/// `n` strictly positive, finite durations in seconds, spanning tiny to huge.
pub fn positive_seconds(seed: u64, n: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut seconds = vec![f64::MIN_POSITIVE, 1e-9, 1.0, 1e30, f64::MAX];
    seconds.extend((0..n).map(|_| {
        let exponent = rng.random_range(-9..=9);
        rng.random_range(1.0..10.0) * 10f64.powi(exponent)
    }));
    seconds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_positive_and_reproducible() {
        let counts = positive_counts(7, 50);
        assert!(counts.iter().all(|&c| c >= 1));
        assert_eq!(counts, positive_counts(7, 50));

        let seconds = positive_seconds(7, 50);
        assert!(seconds.iter().all(|&s| s > 0.0 && s.is_finite()));
        assert_eq!(seconds.len(), 55);
    }
}
