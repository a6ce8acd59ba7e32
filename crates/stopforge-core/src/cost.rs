//! Cost values reported by the search loop.

use std::fmt::Debug;

use num_traits::Num;

/// A solution cost as seen by stopping criteria.
///
/// Lower is better. Any primitive numeric type qualifies, so callers may
/// report integral costs (`u64`, `i64`) or floating point costs (`f64`).
/// Criteria only compare costs with `<`, which makes NaN behave as
/// "not an improvement".
pub trait Cost: Num + PartialOrd + Copy + Debug + Send + 'static {}

impl<T> Cost for T where T: Num + PartialOrd + Copy + Debug + Send + 'static {}
