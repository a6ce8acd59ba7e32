//! Logging setup for StopForge.
//!
//! Installs a `tracing` subscriber that prints criterion events.
//!
//! ## Log Levels
//!
//! - **WARN**: Suspicious configuration (e.g. single-child composites)
//! - **DEBUG**: Criterion construction and budgets being reached
//!
//! The default filter is `stopforge_criteria=info`; override it with
//! `RUST_LOG`, e.g. `RUST_LOG=stopforge_criteria=debug`.

use std::sync::OnceLock;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceLock<bool> = OnceLock::new();

const DEFAULT_DIRECTIVE: &str = "stopforge_criteria=info";

/// Initializes logging output.
///
/// Safe to call multiple times - only the first call has effect. Returns
/// true if this process now has StopForge's subscriber installed, false if
/// another global subscriber was already set.
pub fn init() -> bool {
    *INIT.get_or_init(|| {
        tracing_subscriber::registry()
            .with(filter())
            .with(fmt::layer().with_target(true))
            .try_init()
            .is_ok()
    })
}

fn filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(
            DEFAULT_DIRECTIVE
                .parse()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        )
        .from_env_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let first = init();
        let second = init();
        assert_eq!(first, second);
        tracing::warn!(target: "stopforge_criteria", "console initialised");
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(DEFAULT_DIRECTIVE
            .parse::<tracing_subscriber::filter::Directive>()
            .is_ok());
    }
}
