//! Builder module for constructing criteria from configuration
//!
//! This module provides the wiring between configuration types and the
//! criterion implementations. Parameter ranges are validated here, so a bad
//! value in a configuration file surfaces as
//! [`StopForgeError::InvalidParameter`] before any search starts.

use stopforge_config::{CriterionConfig, StoppingConfig};
use stopforge_core::{Clock, Cost, MonotonicClock, Result, StopForgeError};
use tracing::{debug, warn};

use crate::criterion::{
    And, BoxedCriterion, MaxIterations, MaxRuntime, NoImprovement, Not, Or, StoppingCriterionExt,
};

/// Builder for constructing criteria from configuration.
pub struct CriterionBuilder;

impl CriterionBuilder {
    /// Builds a criterion tree from a single configuration node.
    pub fn build<C: Cost>(config: &CriterionConfig) -> Result<BoxedCriterion<C>> {
        Self::build_with_clock(config, MonotonicClock::new())
    }

    /// Builds a criterion tree whose time-based leaves read `clock`.
    pub fn build_with_clock<C, K>(config: &CriterionConfig, clock: K) -> Result<BoxedCriterion<C>>
    where
        C: Cost,
        K: Clock + Clone + 'static,
    {
        let criterion = Self::build_node(config, &clock)?;
        debug!(root = config.type_name(), "Built stopping criterion");
        Ok(criterion)
    }

    /// Builds the criterion described by a full stopping configuration.
    ///
    /// Flat limits and the `criterion` tree are combined with OR, in the order
    /// runtime, iterations, patience, tree.
    ///
    /// # Errors
    ///
    /// Returns [`StopForgeError::InvalidParameter`] if nothing is configured
    /// or any parameter is out of range.
    pub fn from_config<C: Cost>(config: &StoppingConfig) -> Result<BoxedCriterion<C>> {
        Self::from_config_with_clock(config, MonotonicClock::new())
    }

    /// Like [`from_config`](Self::from_config), with an injected clock.
    pub fn from_config_with_clock<C, K>(
        config: &StoppingConfig,
        clock: K,
    ) -> Result<BoxedCriterion<C>>
    where
        C: Cost,
        K: Clock + Clone + 'static,
    {
        let mut criteria: Vec<BoxedCriterion<C>> = Vec::new();

        if let Some(seconds) = config.max_runtime_seconds {
            criteria.push(MaxRuntime::with_clock(seconds, clock.clone())?.boxed());
        }
        if let Some(iterations) = config.max_iterations {
            criteria.push(Self::max_iterations(iterations)?.boxed());
        }
        if let Some(patience) = config.no_improvement_patience {
            criteria.push(Self::no_improvement::<C>(patience)?.boxed());
        }
        if let Some(tree) = &config.criterion {
            criteria.push(Self::build_node(tree, &clock)?);
        }

        let count = criteria.len();
        let criterion = match count {
            0 => {
                return Err(StopForgeError::invalid_parameter(
                    "no stopping criterion configured",
                ))
            }
            1 => criteria.remove(0),
            _ => Or::new(criteria)?.boxed(),
        };
        debug!(criteria = count, "Built stopping criterion from configuration");
        Ok(criterion)
    }

    fn build_node<C, K>(config: &CriterionConfig, clock: &K) -> Result<BoxedCriterion<C>>
    where
        C: Cost,
        K: Clock + Clone + 'static,
    {
        match config {
            CriterionConfig::MaxRuntime(runtime) => {
                Ok(MaxRuntime::with_clock(runtime.seconds, clock.clone())?.boxed())
            }

            CriterionConfig::MaxIterations(iterations) => {
                Ok(Self::max_iterations(iterations.iterations)?.boxed())
            }

            CriterionConfig::NoImprovement(no_improvement) => {
                Ok(Self::no_improvement::<C>(no_improvement.patience)?.boxed())
            }

            CriterionConfig::And(composite) => {
                let children = Self::build_children(config, &composite.criteria, clock)?;
                Ok(And::new(children)?.boxed())
            }

            CriterionConfig::Or(composite) => {
                let children = Self::build_children(config, &composite.criteria, clock)?;
                Ok(Or::new(children)?.boxed())
            }

            CriterionConfig::Not(not) => {
                let inner = Self::build_node(&not.criterion, clock)?;
                Ok(Not::new(inner).boxed())
            }
        }
    }

    fn build_children<C, K>(
        parent: &CriterionConfig,
        children: &[CriterionConfig],
        clock: &K,
    ) -> Result<Vec<BoxedCriterion<C>>>
    where
        C: Cost,
        K: Clock + Clone + 'static,
    {
        if children.len() == 1 {
            warn!(
                node = parent.type_name(),
                "Composite criterion has a single child and behaves like that child"
            );
        }
        children
            .iter()
            .map(|child| Self::build_node(child, clock))
            .collect()
    }

    fn max_iterations(iterations: i64) -> Result<MaxIterations> {
        MaxIterations::new(Self::positive("max iterations", iterations)?)
    }

    fn no_improvement<C: Cost>(patience: i64) -> Result<NoImprovement<C>> {
        NoImprovement::new(Self::positive("no-improvement patience", patience)?)
    }

    fn positive(name: &str, value: i64) -> Result<u64> {
        u64::try_from(value)
            .ok()
            .filter(|&v| v > 0)
            .ok_or_else(|| {
                StopForgeError::invalid_parameter(format!(
                    "{name} must be at least 1, got {value}"
                ))
            })
    }
}
