//! Convenience result type alias for Dipinto.

use crate::error::AppError;

/// A specialized `Result` type for Dipinto operations.
pub type AppResult<T> = Result<T, AppError>;
