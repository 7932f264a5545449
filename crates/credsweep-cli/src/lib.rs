//! credsweep CLI library.
//!
//! Argument handling, the interactive review session and output formatting
//! for the `credsweep` binary.

pub mod cli;
pub mod error;
pub mod output;
pub mod review;
pub mod sweep;

pub use cli::{parse_days, parse_pattern, Cli, ParsedPattern};
pub use error::{CliError, Result};
pub use output::Formatter;
pub use review::{ReviewCommand, ReviewMode, ReviewReport, ReviewSession, ReviewState, SessionOutcome};
pub use sweep::{run_sweep, run_sweep_at};

/// Normal completion.
pub const EXIT_OK: i32 = 0;

/// Encoding error or fatal run error.
///
/// Threshold range errors and enumeration failures exit with this status,
/// never with [`EXIT_OK`].
pub const EXIT_FAILURE: i32 = 1;

/// Operator quit the review.
pub const EXIT_QUIT: i32 = 10;
