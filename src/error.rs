//! Application-level error types.

use thiserror::Error;

/// Errors that can occur within the application.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("cannot paint color {input:?}: {reason}")]
    InvalidColor { input: String, reason: String },
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
