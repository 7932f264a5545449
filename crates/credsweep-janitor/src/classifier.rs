//! Age classification of inventory records

use crate::JanitorError;
use credsweep_domain::CredentialRecord;
use std::time::{SystemTime, UNIX_EPOCH};

/// Hours in one retention day
pub const HOURS_PER_DAY: u32 = 24;

const MICROS_PER_HOUR: i64 = 3_600_000_000;

/// Current time in microseconds since the Unix epoch
pub fn current_unix_micros() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as i64)
        .unwrap_or_default()
}

/// Validated instant separating fresh records from stale ones
///
/// The threshold is expressed in hours held in a signed 32-bit count, the
/// native duration type of the reference clock. Anything that does not fit,
/// or that reaches back before 1970-01-01, is rejected.
///
/// # Examples
///
/// ```
/// use credsweep_janitor::{JanitorError, RetentionCutoff};
///
/// let now = 1_700_000_000_000_000;
/// let cutoff = RetentionCutoff::from_days(1, now).unwrap();
/// assert_eq!(cutoff.cutoff_micros(), now - 86_400_000_000);
///
/// assert!(matches!(
///     RetentionCutoff::from_days(u32::MAX, now),
///     Err(JanitorError::ThresholdTooLarge { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionCutoff {
    days: u32,
    cutoff_micros: i64,
}

impl RetentionCutoff {
    /// Validate `days` against `now_micros` and compute the cutoff
    pub fn from_days(days: u32, now_micros: i64) -> Result<Self, JanitorError> {
        let hours = days
            .checked_mul(HOURS_PER_DAY)
            .filter(|hours| *hours <= i32::MAX as u32)
            .ok_or(JanitorError::ThresholdTooLarge { days })?;

        let threshold_micros = i64::from(hours) * MICROS_PER_HOUR;
        if threshold_micros > now_micros {
            return Err(JanitorError::ThresholdExceedsRange { days });
        }

        Ok(Self {
            days,
            cutoff_micros: now_micros - threshold_micros,
        })
    }

    /// Cutoff relative to the current system time
    pub fn now(days: u32) -> Result<Self, JanitorError> {
        Self::from_days(days, current_unix_micros())
    }

    /// Retention threshold in days
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Cutoff instant in microseconds since the Unix epoch
    pub fn cutoff_micros(&self) -> i64 {
        self.cutoff_micros
    }

    /// A record is stale iff its last write is strictly before the cutoff
    pub fn is_stale(&self, record: &CredentialRecord) -> bool {
        record.last_written_micros() < self.cutoff_micros
    }
}

/// Select stale records, largest payload first
///
/// The sort is stable: records of equal size keep their enumeration order.
pub fn classify(records: &[CredentialRecord], cutoff: &RetentionCutoff) -> Vec<CredentialRecord> {
    let mut stale: Vec<CredentialRecord> = records
        .iter()
        .filter(|record| cutoff.is_stale(record))
        .cloned()
        .collect();

    stale.sort_by(|a, b| b.payload_size.cmp(&a.payload_size));

    tracing::info!(
        days = cutoff.days(),
        total = records.len(),
        stale = stale.len(),
        "Classified records by age"
    );

    stale
}

#[cfg(test)]
mod tests {
    use super::*;
    use credsweep_domain::{CredentialKind, FileTime};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    const NOW: i64 = 1_760_000_000_000_000;
    const DAY: i64 = 86_400_000_000;

    fn record(name: &str, size: u32, micros: i64) -> CredentialRecord {
        CredentialRecord {
            name: name.to_string(),
            payload_size: size,
            last_written: FileTime::from_unix_micros(micros),
            kind: CredentialKind::GENERIC,
        }
    }

    #[test]
    fn test_cutoff_computation() {
        let cutoff = RetentionCutoff::from_days(180, NOW).unwrap();
        assert_eq!(cutoff.days(), 180);
        assert_eq!(cutoff.cutoff_micros(), NOW - 180 * DAY);
    }

    #[test]
    fn test_zero_days_cutoff_is_now() {
        let cutoff = RetentionCutoff::from_days(0, NOW).unwrap();
        assert_eq!(cutoff.cutoff_micros(), NOW);
    }

    #[test]
    fn test_threshold_too_large() {
        assert_eq!(
            RetentionCutoff::from_days(4_294_967_295, NOW),
            Err(JanitorError::ThresholdTooLarge { days: 4_294_967_295 })
        );
        // first value whose hour count no longer fits in i32
        let first_overflow = i32::MAX as u32 / HOURS_PER_DAY + 1;
        assert!(matches!(
            RetentionCutoff::from_days(first_overflow, NOW),
            Err(JanitorError::ThresholdTooLarge { .. })
        ));
    }

    #[test]
    fn test_threshold_exceeds_range() {
        let days_since_epoch = (NOW / DAY) as u32;
        assert!(RetentionCutoff::from_days(days_since_epoch, NOW).is_ok());
        assert_eq!(
            RetentionCutoff::from_days(days_since_epoch + 1, NOW),
            Err(JanitorError::ThresholdExceedsRange {
                days: days_since_epoch + 1
            })
        );
    }

    #[test]
    fn test_cutoff_exactly_at_epoch_is_allowed() {
        let cutoff = RetentionCutoff::from_days(10, 10 * DAY).unwrap();
        assert_eq!(cutoff.cutoff_micros(), 0);
    }

    #[test]
    fn test_boundary_is_not_stale() {
        let cutoff = RetentionCutoff::from_days(30, NOW).unwrap();
        let at = record("at", 1, cutoff.cutoff_micros());
        let before = record("before", 1, cutoff.cutoff_micros() - 1);
        let after = record("after", 1, cutoff.cutoff_micros() + 1);

        assert!(!cutoff.is_stale(&at));
        assert!(cutoff.is_stale(&before));
        assert!(!cutoff.is_stale(&after));
    }

    #[test]
    fn test_classify_sorts_descending_and_filters() {
        let cutoff = RetentionCutoff::from_days(180, NOW).unwrap();
        let old = NOW - 200 * DAY;
        let records = vec![
            record("a", 100, old),
            record("fresh", 999, NOW - DAY),
            record("b", 50, old),
            record("c", 200, old),
        ];

        let stale = classify(&records, &cutoff);
        let sizes: Vec<u32> = stale.iter().map(|r| r.payload_size).collect();
        assert_eq!(sizes, vec![200, 100, 50]);
    }

    #[test]
    fn test_classify_is_stable_for_equal_sizes() {
        let cutoff = RetentionCutoff::from_days(1, NOW).unwrap();
        let old = NOW - 10 * DAY;
        let records = vec![
            record("first", 10, old),
            record("big", 20, old),
            record("second", 10, old),
            record("third", 10, old),
        ];

        let names: Vec<String> = classify(&records, &cutoff)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["big", "first", "second", "third"]);
    }

    #[test]
    fn test_records_before_1970_are_stale() {
        let cutoff = RetentionCutoff::from_days(0, NOW).unwrap();
        let ancient = CredentialRecord {
            name: "ancient".to_string(),
            payload_size: 1,
            last_written: FileTime::new(0, 0),
            kind: CredentialKind::GENERIC,
        };
        assert!(cutoff.is_stale(&ancient));
    }

    proptest! {
        #[test]
        fn prop_partition_and_order(
            entries in prop::collection::vec((0u32..500, -400i64..400), 0..40),
            days in 0u32..365,
        ) {
            let cutoff = RetentionCutoff::from_days(days, NOW).unwrap();
            let records: Vec<CredentialRecord> = entries
                .iter()
                .enumerate()
                .map(|(i, (size, offset_days))| record(&i.to_string(), *size, NOW + offset_days * DAY - 1))
                .collect();

            let stale = classify(&records, &cutoff);

            // membership: exactly the records strictly before the cutoff
            let expected: BTreeSet<&str> = records
                .iter()
                .filter(|r| r.last_written_micros() < NOW - i64::from(days) * DAY)
                .map(|r| r.name.as_str())
                .collect();
            let selected: BTreeSet<&str> = stale.iter().map(|r| r.name.as_str()).collect();
            prop_assert_eq!(stale.len(), expected.len());
            prop_assert_eq!(selected, expected);

            // non-increasing sizes, ties in input order
            for pair in stale.windows(2) {
                prop_assert!(pair[0].payload_size >= pair[1].payload_size);
                if pair[0].payload_size == pair[1].payload_size {
                    let a: usize = pair[0].name.parse().unwrap();
                    let b: usize = pair[1].name.parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }
}
