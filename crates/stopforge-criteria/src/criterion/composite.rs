//! Composite stopping criteria (AND/OR/NOT).
//!
//! Children are always evaluated in order and never short-circuited: every
//! child sees every call, which keeps counting children in step with the
//! search regardless of what their siblings answer.

use std::marker::PhantomData;

use stopforge_core::{Cost, Result, StopForgeError};

use super::{BoxedCriterion, StoppingCriterion};

fn non_empty<C: Cost>(
    kind: &str,
    children: Vec<BoxedCriterion<C>>,
) -> Result<Vec<BoxedCriterion<C>>> {
    if children.is_empty() {
        return Err(StopForgeError::invalid_parameter(format!(
            "{kind} criterion needs at least one child"
        )));
    }
    Ok(children)
}

/// Combines criteria with AND logic (all must stop).
///
/// # Example
///
/// ```
/// use stopforge_criteria::{And, MaxIterations, StoppingCriterion, StoppingCriterionExt};
///
/// // Stop only after 2 AND 4 iterations, i.e. on the 4th call.
/// let mut criterion = And::new(vec![
///     MaxIterations::new(2).unwrap().boxed(),
///     MaxIterations::new(4).unwrap().boxed(),
/// ])
/// .unwrap();
///
/// let answers: Vec<bool> = (0..4).map(|_| criterion.should_stop(1.0)).collect();
/// assert_eq!(answers, [false, false, false, true]);
/// ```
#[derive(Debug)]
pub struct And<C: Cost> {
    children: Vec<BoxedCriterion<C>>,
}

impl<C: Cost> And<C> {
    /// Creates an AND criterion over `children`.
    ///
    /// # Errors
    ///
    /// Returns [`StopForgeError::InvalidParameter`] if `children` is empty.
    pub fn new(children: Vec<BoxedCriterion<C>>) -> Result<Self> {
        Ok(Self {
            children: non_empty("and", children)?,
        })
    }

    pub(crate) fn pair(first: BoxedCriterion<C>, second: BoxedCriterion<C>) -> Self {
        Self {
            children: vec![first, second],
        }
    }

    /// Appends another child, evaluated after the existing ones.
    pub fn push(&mut self, child: BoxedCriterion<C>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C: Cost> StoppingCriterion<C> for And<C> {
    fn should_stop(&mut self, best_cost: C) -> bool {
        self.children
            .iter_mut()
            .fold(true, |all, child| child.should_stop(best_cost) & all)
    }
}

/// Combines criteria with OR logic (any must stop).
///
/// # Example
///
/// ```
/// use stopforge_criteria::{MaxIterations, MaxRuntime, Or, StoppingCriterionExt};
///
/// // Stop after 60 seconds OR 1000 iterations
/// let criterion: Or<u64> = Or::new(vec![
///     MaxRuntime::new(60.0).unwrap().boxed(),
///     MaxIterations::new(1000).unwrap().boxed(),
/// ])
/// .unwrap();
/// assert_eq!(criterion.len(), 2);
/// ```
#[derive(Debug)]
pub struct Or<C: Cost> {
    children: Vec<BoxedCriterion<C>>,
}

impl<C: Cost> Or<C> {
    /// Creates an OR criterion over `children`.
    ///
    /// # Errors
    ///
    /// Returns [`StopForgeError::InvalidParameter`] if `children` is empty.
    pub fn new(children: Vec<BoxedCriterion<C>>) -> Result<Self> {
        Ok(Self {
            children: non_empty("or", children)?,
        })
    }

    pub(crate) fn pair(first: BoxedCriterion<C>, second: BoxedCriterion<C>) -> Self {
        Self {
            children: vec![first, second],
        }
    }

    /// Appends another child, evaluated after the existing ones.
    pub fn push(&mut self, child: BoxedCriterion<C>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C: Cost> StoppingCriterion<C> for Or<C> {
    fn should_stop(&mut self, best_cost: C) -> bool {
        self.children
            .iter_mut()
            .fold(false, |any, child| child.should_stop(best_cost) | any)
    }
}

/// Inverts a criterion.
///
/// The child is evaluated on every call, so its state advances exactly as it
/// would without the wrapper. Useful as a guard inside [`And`], e.g. "stop on
/// stagnation, but not before the time budget has been half used".
///
/// The cost type is part of the wrapper so that children implementing
/// [`StoppingCriterion`] for every cost type still resolve to one.
#[derive(Debug, Clone)]
pub struct Not<T, C: Cost> {
    inner: T,
    _cost: PhantomData<fn(C)>,
}

impl<T, C: Cost> Not<T, C> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            _cost: PhantomData,
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<C: Cost, T: StoppingCriterion<C>> StoppingCriterion<C> for Not<T, C> {
    #[inline]
    fn should_stop(&mut self, best_cost: C) -> bool {
        !self.inner.should_stop(best_cost)
    }
}
