//! Convenience result type alias for DocSystem.

use crate::error::AppError;

/// A specialized `Result` type for DocSystem operations.
pub type AppResult<T> = Result<T, AppError>;
