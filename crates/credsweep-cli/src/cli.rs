//! CLI argument definitions and parsing.

use crate::error::{CliError, Result};
use clap::Parser;
use credsweep_janitor::{SweepConfig, DEFAULT_RETENTION_DAYS, MAX_PATTERN_BYTES};
use std::ffi::{OsStr, OsString};

/// credsweep - Review and delete stale entries in the Windows Credential Manager.
#[derive(Debug, Parser)]
#[command(name = "credsweep")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
#[command(after_help = "\
Arguments:
 pattern - string including wildcard to select which credentials to query (max 255 char). Defaults to Adobe*
 age     - delete credentials older than x number of days. Defaults to 180")]
pub struct Cli {
    /// Credential name pattern, `*` matches any run of characters
    #[arg(value_parser = clap::value_parser!(OsString), allow_hyphen_values = true)]
    pub pattern: Option<OsString>,

    /// Review credentials last written more than this many days ago
    #[arg(value_parser = clap::value_parser!(OsString))]
    pub age: Option<OsString>,

    /// Log every enumerated credential's fields
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Build the sweep configuration, collecting warnings for the operator.
    pub fn into_config(self) -> Result<(SweepConfig, Vec<String>)> {
        let mut config = SweepConfig::default().with_verbose(self.verbose);
        let mut warnings = Vec::new();

        if let Some(raw) = &self.pattern {
            let parsed = parse_pattern(raw)?;
            if parsed.truncated {
                warnings.push(
                    "Warning - the provided filter is too long and may be truncated".to_string(),
                );
            }
            config = config.with_pattern(parsed.pattern);
        }

        let days = self
            .age
            .as_deref()
            .map(|age| parse_days(&age.to_string_lossy()))
            .unwrap_or(DEFAULT_RETENTION_DAYS);

        Ok((config.with_retention_days(days), warnings))
    }
}

/// A pattern argument after truncation and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    /// Decoded pattern
    pub pattern: String,
    /// Whether source bytes beyond the limit were dropped
    pub truncated: bool,
}

/// Decode a pattern argument.
///
/// At most [`MAX_PATTERN_BYTES`] source bytes are kept. The kept bytes must be
/// non-empty UTF-8; a cut through a multi-byte character is an encoding error.
pub fn parse_pattern(raw: &OsStr) -> Result<ParsedPattern> {
    let bytes = raw.as_encoded_bytes();
    let truncated = bytes.len() > MAX_PATTERN_BYTES;
    let kept = &bytes[..bytes.len().min(MAX_PATTERN_BYTES)];

    if kept.is_empty() {
        return Err(CliError::Encoding("pattern is empty".to_string()));
    }

    let pattern = std::str::from_utf8(kept)
        .map_err(|e| CliError::Encoding(e.to_string()))?
        .to_string();

    Ok(ParsedPattern { pattern, truncated })
}

/// Parse a day count the way `strtoul` does.
///
/// Leading whitespace and one sign are accepted, digits are read up to the
/// first non-digit, no digits gives 0. Overflow saturates to `u32::MAX`; a
/// minus sign negates with wraparound.
pub fn parse_days(arg: &str) -> u32 {
    let s = arg.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: Vec<u32> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| u32::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return 0;
    }

    match digits
        .iter()
        .try_fold(0u32, |acc, &d| acc.checked_mul(10)?.checked_add(d))
    {
        Some(value) if negative => value.wrapping_neg(),
        Some(value) => value,
        None => u32::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_use_defaults() {
        let cli = Cli::parse_from(["credsweep"]);
        let (config, warnings) = cli.into_config().unwrap();
        assert_eq!(config.pattern, "Adobe*");
        assert_eq!(config.retention_days, 180);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_pattern_only() {
        let cli = Cli::parse_from(["credsweep", "Test*"]);
        let (config, _) = cli.into_config().unwrap();
        assert_eq!(config.pattern, "Test*");
        assert_eq!(config.retention_days, 180);
    }

    #[test]
    fn test_pattern_and_age() {
        let cli = Cli::parse_from(["credsweep", "Test*", "30", "--verbose"]);
        let (config, _) = cli.into_config().unwrap();
        assert_eq!(config.pattern, "Test*");
        assert_eq!(config.retention_days, 30);
        assert!(config.verbose);
    }

    #[test]
    fn test_negative_age_is_accepted() {
        let cli = Cli::parse_from(["credsweep", "Test*", "-1"]);
        let (config, _) = cli.into_config().unwrap();
        assert_eq!(config.retention_days, u32::MAX);
    }

    #[test]
    fn test_pattern_may_start_with_hyphen() {
        let cli = Cli::try_parse_from(["credsweep", "-Adobe*"]).unwrap();
        assert!(!cli.verbose);
        let (config, _) = cli.into_config().unwrap();
        assert_eq!(config.pattern, "-Adobe*");
        assert_eq!(config.retention_days, 180);
    }

    #[test]
    fn test_flags_still_parse_next_to_hyphen_pattern() {
        let cli = Cli::try_parse_from(["credsweep", "--verbose", "-Adobe*", "7"]).unwrap();
        assert!(cli.verbose);
        let (config, _) = cli.into_config().unwrap();
        assert_eq!(config.pattern, "-Adobe*");
        assert_eq!(config.retention_days, 7);

        let cli = Cli::try_parse_from(["credsweep", "Adobe*", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_three_positionals_is_usage_error() {
        let err = Cli::try_parse_from(["credsweep", "a", "1", "extra"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_days("180"), 180);
        assert_eq!(parse_days("  42"), 42);
        assert_eq!(parse_days("+7"), 7);
        assert_eq!(parse_days("12abc"), 12);
        assert_eq!(parse_days("abc"), 0);
        assert_eq!(parse_days(""), 0);
        assert_eq!(parse_days("-"), 0);
        assert_eq!(parse_days("4294967295"), u32::MAX);
        assert_eq!(parse_days("99999999999"), u32::MAX);
        assert_eq!(parse_days("-1"), u32::MAX);
        assert_eq!(parse_days("-2"), u32::MAX - 1);
    }

    #[test]
    fn test_long_pattern_is_truncated_with_warning() {
        let long = "a".repeat(300);
        let parsed = parse_pattern(OsStr::new(&long)).unwrap();
        assert!(parsed.truncated);
        assert_eq!(parsed.pattern.len(), MAX_PATTERN_BYTES);

        let cli = Cli::parse_from(["credsweep", long.as_str()]);
        let (config, warnings) = cli.into_config().unwrap();
        assert_eq!(config.pattern.len(), MAX_PATTERN_BYTES);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_pattern_at_limit_is_kept_whole() {
        // a full 255-byte pattern loses nothing, so no truncation warning
        let exact = "b".repeat(MAX_PATTERN_BYTES);
        let parsed = parse_pattern(OsStr::new(&exact)).unwrap();
        assert!(!parsed.truncated);
        assert_eq!(parsed.pattern, exact);
    }

    #[test]
    fn test_truncation_through_multibyte_char_is_encoding_error() {
        // 254 ASCII bytes then a 2-byte character straddling the limit
        let pattern = format!("{}é", "a".repeat(MAX_PATTERN_BYTES - 1));
        assert!(matches!(
            parse_pattern(OsStr::new(&pattern)),
            Err(CliError::Encoding(_))
        ));
    }

    #[test]
    fn test_empty_pattern_is_encoding_error() {
        assert!(matches!(
            parse_pattern(OsStr::new("")),
            Err(CliError::Encoding(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(&[b'A', 0xFF, b'*']);
        let err = parse_pattern(raw).unwrap_err();
        assert_eq!(err.exit_code(), crate::EXIT_FAILURE);
    }
}
