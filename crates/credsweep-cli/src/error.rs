//! Error types for the CLI application.

use credsweep_janitor::JanitorError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pattern could not be converted to the store's wide encoding
    #[error("Failure to convert pattern to UTF-16: {0}")]
    Encoding(String),

    /// Janitor error (threshold validation, enumeration)
    #[error(transparent)]
    Janitor(#[from] JanitorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        crate::EXIT_FAILURE
    }
}
