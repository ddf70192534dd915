//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::config::ConfigError;
pub use crate::mail::MailError;
pub use crate::state::StateError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration and content loading errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Page controller errors
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Mail hand-off errors
    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
