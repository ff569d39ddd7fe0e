//! Policy registry errors.

use thiserror::Error;

use connect_core::error::{AppError, ErrorKind};

/// Errors raised when setting the active policy version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Policy versions start at 1.
    #[error("policy version must be at least 1, got {0}")]
    InvalidVersion(i64),
}

impl From<PolicyError> for AppError {
    fn from(err: PolicyError) -> Self {
        AppError::with_source(ErrorKind::Configuration, err.to_string(), err)
    }
}
