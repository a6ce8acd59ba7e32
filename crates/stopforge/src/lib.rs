//! StopForge - composable stopping criteria for metaheuristic search
//!
//! An iterative optimizer asks its stopping criterion once per iteration
//! whether to continue. StopForge provides the criteria (wall-clock budget,
//! iteration budget, no-improvement patience, external flag), AND/OR/NOT
//! combinators, and a configuration layer that builds criterion trees from
//! TOML or YAML.
//!
//! # Example
//!
//! ```
//! use stopforge::prelude::*;
//!
//! let mut criterion = stopforge::criterion_from_toml_str::<u64>(r#"
//!     max_runtime_seconds = 60
//!     no_improvement_patience = 2
//! "#).unwrap();
//!
//! let costs = [50, 40, 40, 40];
//! let stopped_at = costs.iter().position(|&c| criterion.should_stop(c));
//! assert_eq!(stopped_at, Some(3));
//! ```

use std::path::Path;

use thiserror::Error;

pub use stopforge_config::{
    CompositeConfig, ConfigError, CriterionConfig, MaxIterationsConfig, MaxRuntimeConfig,
    NoImprovementConfig, NotConfig, StoppingConfig,
};
pub use stopforge_core::{Clock, Cost, ManualClock, MonotonicClock, StopForgeError};
pub use stopforge_criteria::{
    And, BoxedCriterion, CriterionBuilder, ExternalStop, MaxIterations, MaxRuntime,
    NoImprovement, Not, Or, StopHandle, StoppingCriterion, StoppingCriterionExt,
};

#[cfg(feature = "console")]
pub use stopforge_console as console;

/// Errors from loading a criterion out of a configuration source.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Criterion(#[from] StopForgeError),
}

/// Result type alias for the one-call loaders.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses a TOML stopping configuration and builds its criterion.
pub fn criterion_from_toml_str<C: Cost>(s: &str) -> Result<BoxedCriterion<C>> {
    build(&StoppingConfig::from_toml_str(s)?)
}

/// Loads a TOML stopping configuration file and builds its criterion.
pub fn criterion_from_toml_file<C: Cost>(path: impl AsRef<Path>) -> Result<BoxedCriterion<C>> {
    build(&StoppingConfig::from_toml_file(path)?)
}

/// Parses a YAML stopping configuration and builds its criterion.
pub fn criterion_from_yaml_str<C: Cost>(s: &str) -> Result<BoxedCriterion<C>> {
    build(&StoppingConfig::from_yaml_str(s)?)
}

fn build<C: Cost>(config: &StoppingConfig) -> Result<BoxedCriterion<C>> {
    let criterion = CriterionBuilder::from_config(config)?;
    tracing::debug!(?config, "Loaded stopping configuration");
    Ok(criterion)
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use stopforge_core::{Clock, Cost, ManualClock, StopForgeError};
    pub use stopforge_criteria::{
        And, BoxedCriterion, CriterionBuilder, ExternalStop, MaxIterations, MaxRuntime,
        NoImprovement, Not, Or, StoppingCriterion, StoppingCriterionExt,
    };
    pub use stopforge_config::{CriterionConfig, StoppingConfig};
}
