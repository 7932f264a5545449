//! Aggregate size statistics for an inventory
//!
//! The estimate mirrors how the store accounts for an entry: every string is
//! held as UTF-16 and every record and attribute carries a fixed native header.

use credsweep_domain::RawCredential;

/// Bytes per UTF-16 code unit
pub const WIDE_CHAR_SIZE: u64 = 2;

/// Fixed per-record header (native credential structure, 64-bit layout)
pub const CREDENTIAL_HEADER_SIZE: u64 = 80;

/// Fixed per-attribute header (native attribute structure, 64-bit layout)
pub const ATTRIBUTE_HEADER_SIZE: u64 = 24;

const BYTES_PER_KIB: f64 = 1024.0;

/// Byte length of a string in the store's wide encoding
pub fn wide_len(s: &str) -> u64 {
    s.encode_utf16().count() as u64 * WIDE_CHAR_SIZE
}

/// Estimated bytes an entry occupies in the store, payload included
pub fn estimated_footprint(raw: &RawCredential) -> u64 {
    let optional_strings = [&raw.comment, &raw.target_alias, &raw.user_name]
        .into_iter()
        .flatten()
        .map(|s| wide_len(s))
        .sum::<u64>();

    let attributes = raw
        .attributes
        .iter()
        .map(|attr| {
            attr.keyword.as_deref().map(wide_len).unwrap_or(0)
                + u64::from(attr.value_size)
                + ATTRIBUTE_HEADER_SIZE
        })
        .sum::<u64>();

    u64::from(raw.blob_size)
        + wide_len(&raw.target_name)
        + optional_strings
        + attributes
        + CREDENTIAL_HEADER_SIZE
}

/// Totals accumulated over one enumeration pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryStats {
    /// Entries seen
    pub record_count: usize,

    /// Sum of secret payload sizes
    pub total_payload_bytes: u64,

    /// Payload plus estimated metadata overhead
    pub estimated_total_bytes: u64,
}

impl InventoryStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one raw entry
    pub fn record(&mut self, raw: &RawCredential) {
        self.record_count += 1;
        self.total_payload_bytes += u64::from(raw.blob_size);
        self.estimated_total_bytes += estimated_footprint(raw);
    }

    /// Payload total in KiB
    pub fn total_payload_kib(&self) -> f64 {
        self.total_payload_bytes as f64 / BYTES_PER_KIB
    }

    /// Estimated total in KiB
    pub fn estimated_total_kib(&self) -> f64 {
        self.estimated_total_bytes as f64 / BYTES_PER_KIB
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        [
            format!("Found {} creds", self.record_count),
            format!("Total blob size: {}KiB", format_significant(self.total_payload_kib(), 5)),
            format!(
                "Estimated total size: {}KiB",
                format_significant(self.estimated_total_kib(), 5)
            ),
        ]
        .join("\n")
    }
}

/// Format with at most `digits` significant digits, `%g` style
///
/// Trailing zeros are dropped; very small or very large magnitudes switch
/// to exponent notation.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
    else {
        return value.to_string();
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value))
    }
}

fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}
