//! Error types for StopForge

use thiserror::Error;

/// Main error type for StopForge operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StopForgeError {
    /// A budget, count or patience is out of range, or a composite has no children.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl StopForgeError {
    /// Creates an [`StopForgeError::InvalidParameter`] error.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

/// Result type alias for StopForge operations
pub type Result<T> = std::result::Result<T, StopForgeError>;
