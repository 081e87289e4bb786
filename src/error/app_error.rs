use crate::config::error::ConfigError;
use crate::logger::LoggerError;
use thiserror::Error;

/// Application-wide error type for everything around the notification core.
///
/// Notification handles never return these; configuration loading, logger
/// setup and CLI execution do.
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Logger setup error
    #[error("Logger error")]
    Logger {
        #[source]
        source: LoggerError,
    },

    /// A notification closed with a native failure
    #[error("Notification failed: {message}")]
    Notification { message: String },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let key = match &error {
            ConfigError::ValidationError { field, .. } => field.clone(),
            _ => "settings".to_string(),
        };
        AppError::Configuration {
            key,
            source: anyhow::Error::new(error),
        }
    }
}

impl From<LoggerError> for AppError {
    fn from(error: LoggerError) -> Self {
        AppError::Logger { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
