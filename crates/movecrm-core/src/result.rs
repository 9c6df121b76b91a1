//! Convenience result type alias for MoveCRM.

use crate::error::AppError;

/// A specialized `Result` type for MoveCRM operations.
pub type AppResult<T> = Result<T, AppError>;
