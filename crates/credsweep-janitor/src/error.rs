//! Error types for Janitor operations

use thiserror::Error;

/// Errors that can occur during Janitor operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JanitorError {
    /// Threshold does not fit the clock's native duration type
    #[error("Number of days entered is too large: {days}")]
    ThresholdTooLarge {
        /// Requested retention threshold
        days: u32,
    },

    /// Cutoff would fall before 1970-01-01
    #[error("Number of days entered ({days}) is greater than the time between now and 1 January 1970")]
    ThresholdExceedsRange {
        /// Requested retention threshold
        days: u32,
    },

    /// Store enumeration failed; no records were produced
    #[error("Error enumerating credential store: {0}")]
    Enumeration(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
