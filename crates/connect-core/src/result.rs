//! Convenience result type alias for Connect.

use crate::error::AppError;

/// A specialized `Result` type for Connect operations.
pub type AppResult<T> = Result<T, AppError>;
