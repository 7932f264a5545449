//! Native timestamp decoding
//!
//! The credential store reports last-write times as two 32-bit words forming a
//! 64-bit count of 100-nanosecond ticks since 1601-01-01 00:00:00 UTC. Everything
//! downstream compares instants as microseconds since the Unix epoch.

use std::fmt;

/// Microseconds between 1601-01-01 00:00:00 UTC and 1970-01-01 00:00:00 UTC
pub const EPOCH_DIFFERENCE_MICROS: u64 = 11_644_473_600_000_000;

/// Ticks per microsecond in the native clock
const TICKS_PER_MICRO: u64 = 10;

/// Last-write timestamp in the store's native representation
///
/// # Examples
///
/// ```
/// use credsweep_domain::FileTime;
///
/// // 1970-01-01 00:00:00 UTC in native ticks
/// let epoch = FileTime::from_ticks(116_444_736_000_000_000);
/// assert_eq!(epoch.to_unix_micros(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FileTime {
    /// Low 32 bits of the tick count
    pub low: u32,
    /// High 32 bits of the tick count
    pub high: u32,
}

impl FileTime {
    /// Create a timestamp from its two native words
    pub fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Split a 64-bit tick count into native words
    pub fn from_ticks(ticks: u64) -> Self {
        Self {
            low: ticks as u32,
            high: (ticks >> 32) as u32,
        }
    }

    /// Native timestamp for the given microseconds since the Unix epoch
    ///
    /// Sub-microsecond ticks are zero, so this is the exact inverse of
    /// [`FileTime::to_unix_micros`] for every representable value.
    pub fn from_unix_micros(micros: i64) -> Self {
        let native_micros = (micros as i128 + EPOCH_DIFFERENCE_MICROS as i128).max(0) as u64;
        Self::from_ticks(native_micros.saturating_mul(TICKS_PER_MICRO))
    }

    /// Combined 64-bit tick count
    pub fn ticks(&self) -> u64 {
        (u64::from(self.high) << 32) | u64::from(self.low)
    }

    /// Decode to microseconds since 1970-01-01 00:00:00 UTC
    ///
    /// Ticks are truncated to whole microseconds before the epoch shift.
    /// Instants before 1970 come out negative.
    pub fn to_unix_micros(&self) -> i64 {
        // u64::MAX / 10 fits in i64, so neither step can overflow
        (self.ticks() / TICKS_PER_MICRO) as i64 - EPOCH_DIFFERENCE_MICROS as i64
    }
}

impl fmt::Display for FileTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.ticks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const UNIX_EPOCH_TICKS: u64 = EPOCH_DIFFERENCE_MICROS * TICKS_PER_MICRO;

    #[test]
    fn test_unix_epoch_decodes_to_zero() {
        let ft = FileTime::from_ticks(UNIX_EPOCH_TICKS);
        assert_eq!(ft.to_unix_micros(), 0);
    }

    #[test]
    fn test_zero_ticks() {
        let ft = FileTime::new(0, 0);
        assert_eq!(ft.to_unix_micros(), -(EPOCH_DIFFERENCE_MICROS as i64));
    }

    #[test]
    fn test_max_ticks() {
        let ft = FileTime::new(u32::MAX, u32::MAX);
        assert_eq!(ft.ticks(), u64::MAX);
        assert_eq!(
            ft.to_unix_micros(),
            (u64::MAX / 10) as i64 - EPOCH_DIFFERENCE_MICROS as i64
        );
    }

    #[test]
    fn test_word_combination() {
        let ft = FileTime::new(0x0000_0001, 0x0000_0002);
        assert_eq!(ft.ticks(), 0x0000_0002_0000_0001);
    }

    #[test]
    fn test_sub_microsecond_ticks_truncate() {
        let ft = FileTime::from_ticks(UNIX_EPOCH_TICKS + 9);
        assert_eq!(ft.to_unix_micros(), 0);
        let ft = FileTime::from_ticks(UNIX_EPOCH_TICKS + 10);
        assert_eq!(ft.to_unix_micros(), 1);
    }

    #[test]
    fn test_known_instant() {
        // 2024-01-01 00:00:00 UTC
        let micros = 1_704_067_200_000_000;
        let ft = FileTime::from_unix_micros(micros);
        assert_eq!(ft.ticks(), 133_485_408_000_000_000);
        assert_eq!(ft.to_unix_micros(), micros);
    }

    proptest! {
        #[test]
        fn prop_unix_micros_roundtrip(micros in -(EPOCH_DIFFERENCE_MICROS as i64)..(u64::MAX / 10 - EPOCH_DIFFERENCE_MICROS) as i64) {
            prop_assert_eq!(FileTime::from_unix_micros(micros).to_unix_micros(), micros);
        }

        #[test]
        fn prop_decoding_is_monotonic(a in any::<u64>(), b in any::<u64>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(FileTime::from_ticks(lo).to_unix_micros() <= FileTime::from_ticks(hi).to_unix_micros());
        }

        #[test]
        fn prop_words_roundtrip(ticks in any::<u64>()) {
            prop_assert_eq!(FileTime::from_ticks(ticks).ticks(), ticks);
        }
    }
}
