//! Error types for store operations.

use thiserror::Error;

/// Win32 `ERROR_NOT_FOUND`, reported when a named credential does not exist.
pub const ERROR_NOT_FOUND: u32 = 1168;

/// Errors returned by credential store adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The platform call failed with a native error code.
    #[error("{message} (error {code})")]
    Native {
        /// Native error code
        code: u32,
        /// System message text for the code
        message: String,
    },

    /// No credential exists under the given name and kind.
    #[error("Element not found: {0} (error 1168)")]
    NotFound(String),

    /// No credential store exists on this platform.
    #[error("Credential store not available on this platform")]
    NotAvailable,
}

impl StoreError {
    /// Native error code, if the failure came from the platform.
    pub fn code(&self) -> Option<u32> {
        match self {
            StoreError::Native { code, .. } => Some(*code),
            StoreError::NotFound(_) => Some(ERROR_NOT_FOUND),
            StoreError::NotAvailable => None,
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
