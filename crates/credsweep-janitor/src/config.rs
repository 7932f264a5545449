//! Configuration for a sweep run
//!
//! Defines which entries are enumerated and how old they must be to be reviewed.

use crate::JanitorError;
use serde::{Deserialize, Serialize};

/// Pattern used when none is given
pub const DEFAULT_PATTERN: &str = "Adobe*";

/// Retention threshold used when none is given
pub const DEFAULT_RETENTION_DAYS: u32 = 180;

/// Longest pattern accepted without truncation, in source bytes
pub const MAX_PATTERN_BYTES: usize = 255;

/// Configuration for one sweep run
///
/// # Examples
///
/// ```
/// use credsweep_janitor::SweepConfig;
///
/// let config = SweepConfig::default().with_pattern("Test*").with_retention_days(30);
/// assert_eq!(config.pattern, "Test*");
/// assert_eq!(config.retention_days, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Store-native wildcard pattern selecting which entries to enumerate
    /// Default: "Adobe*"
    pub pattern: String,

    /// Entries last written more than this many days ago are stale
    /// Default: 180 days
    pub retention_days: u32,

    /// Dump every enumerated entry's fields
    /// Default: false
    #[serde(default)]
    pub verbose: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            retention_days: DEFAULT_RETENTION_DAYS,
            verbose: false,
        }
    }
}

impl SweepConfig {
    /// Replace the enumeration pattern
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Replace the retention threshold
    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.retention_days = days;
        self
    }

    /// Enable or disable the per-entry dump
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check the configuration before any store access
    pub fn validate(&self) -> Result<(), JanitorError> {
        if self.pattern.is_empty() {
            return Err(JanitorError::Config("pattern must not be empty".to_string()));
        }
        Ok(())
    }
}
