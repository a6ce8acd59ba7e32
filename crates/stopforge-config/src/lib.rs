//! Configuration system for StopForge.
//!
//! Load stopping configuration from TOML or YAML files so the search loop's
//! termination policy can change without code changes.
//!
//! # Examples
//!
//! Flat limits are combined with OR:
//!
//! ```
//! use stopforge_config::StoppingConfig;
//! use std::time::Duration;
//!
//! let config = StoppingConfig::from_toml_str(r#"
//!     max_runtime_seconds = 30
//!     max_iterations = 10000
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.max_iterations, Some(10000));
//! ```
//!
//! Arbitrary trees go under `criterion`:
//!
//! ```
//! use stopforge_config::{CriterionConfig, StoppingConfig};
//!
//! let config = StoppingConfig::from_toml_str(r#"
//!     [criterion]
//!     type = "and"
//!
//!     [[criterion.criteria]]
//!     type = "max_iterations"
//!     iterations = 500
//!
//!     [[criterion.criteria]]
//!     type = "no_improvement"
//!     patience = 50
//! "#).unwrap();
//!
//! assert!(matches!(config.criterion, Some(CriterionConfig::And(_))));
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level stopping configuration.
///
/// Every configured limit applies: the search stops as soon as any flat limit
/// or the `criterion` tree says so.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StoppingConfig {
    /// Maximum wall-clock seconds to spend searching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_runtime_seconds: Option<f64>,

    /// Maximum number of iterations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<i64>,

    /// Maximum consecutive iterations without improving the best cost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_improvement_patience: Option<i64>,

    /// Explicit criterion tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criterion: Option<CriterionConfig>,
}

impl StoppingConfig {
    /// Creates a new, empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// configures no criterion at all.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that at least one criterion is configured.
    ///
    /// Parameter ranges are not checked here; the criterion builder rejects
    /// them when the tree is constructed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.is_empty() {
            return Err(ConfigError::Invalid(
                "no stopping criterion configured".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns true if neither a flat limit nor a tree is configured.
    pub fn is_empty(&self) -> bool {
        self.max_runtime_seconds.is_none()
            && self.max_iterations.is_none()
            && self.no_improvement_patience.is_none()
            && self.criterion.is_none()
    }

    /// Sets the wall-clock limit.
    pub fn with_max_runtime_seconds(mut self, seconds: f64) -> Self {
        self.max_runtime_seconds = Some(seconds);
        self
    }

    /// Sets the iteration limit.
    pub fn with_max_iterations(mut self, iterations: i64) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    /// Sets the no-improvement patience.
    pub fn with_no_improvement_patience(mut self, patience: i64) -> Self {
        self.no_improvement_patience = Some(patience);
        self
    }

    /// Sets the criterion tree.
    pub fn with_criterion(mut self, criterion: CriterionConfig) -> Self {
        self.criterion = Some(criterion);
        self
    }

    /// Returns the flat wall-clock limit as a Duration, if it is representable.
    ///
    /// # Examples
    ///
    /// ```
    /// use stopforge_config::StoppingConfig;
    /// use std::time::Duration;
    ///
    /// let config = StoppingConfig::new().with_max_runtime_seconds(1.5);
    /// assert_eq!(config.time_limit(), Some(Duration::from_millis(1500)));
    ///
    /// let config = StoppingConfig::new().with_max_runtime_seconds(-1.0);
    /// assert_eq!(config.time_limit(), None);
    /// ```
    pub fn time_limit(&self) -> Option<Duration> {
        self.max_runtime_seconds
            .and_then(|s| Duration::try_from_secs_f64(s).ok())
            .filter(|d| !d.is_zero())
    }
}

/// One node of a criterion tree.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CriterionConfig {
    /// Wall-clock budget.
    MaxRuntime(MaxRuntimeConfig),

    /// Iteration budget.
    MaxIterations(MaxIterationsConfig),

    /// Consecutive non-improving iterations.
    NoImprovement(NoImprovementConfig),

    /// Stops when every child stops.
    And(CompositeConfig),

    /// Stops when any child stops.
    Or(CompositeConfig),

    /// Stops when the child does not.
    Not(NotConfig),
}

impl CriterionConfig {
    pub fn max_runtime(seconds: f64) -> Self {
        Self::MaxRuntime(MaxRuntimeConfig { seconds })
    }

    pub fn max_iterations(iterations: i64) -> Self {
        Self::MaxIterations(MaxIterationsConfig { iterations })
    }

    pub fn no_improvement(patience: i64) -> Self {
        Self::NoImprovement(NoImprovementConfig { patience })
    }

    pub fn and(criteria: Vec<CriterionConfig>) -> Self {
        Self::And(CompositeConfig { criteria })
    }

    pub fn or(criteria: Vec<CriterionConfig>) -> Self {
        Self::Or(CompositeConfig { criteria })
    }

    pub fn not(criterion: CriterionConfig) -> Self {
        Self::Not(NotConfig {
            criterion: Box::new(criterion),
        })
    }

    /// Short name of the node type, as written in configuration files.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::MaxRuntime(_) => "max_runtime",
            Self::MaxIterations(_) => "max_iterations",
            Self::NoImprovement(_) => "no_improvement",
            Self::And(_) => "and",
            Self::Or(_) => "or",
            Self::Not(_) => "not",
        }
    }
}

/// Wall-clock budget configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MaxRuntimeConfig {
    /// Budget in seconds.
    pub seconds: f64,
}

/// Iteration budget configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MaxIterationsConfig {
    /// Number of iterations, including the one that stops the search.
    pub iterations: i64,
}

/// No-improvement configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NoImprovementConfig {
    /// Non-improving iterations tolerated.
    pub patience: i64,
}

/// Child list of an AND/OR node.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CompositeConfig {
    /// Children, evaluated in order.
    #[serde(default)]
    pub criteria: Vec<CriterionConfig>,
}

/// Child of a NOT node.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NotConfig {
    pub criterion: Box<CriterionConfig>,
}
