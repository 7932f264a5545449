//! credsweep Janitor
//!
//! Inventory, staleness classification and disposal for credential store entries.
//!
//! # Overview
//!
//! The Janitor is responsible for:
//! - **Inventory**: Turning raw store entries into records and totalling their footprint
//! - **Age classification**: Decoding last-write times and selecting entries older than the retention threshold
//! - **Disposal**: Deleting confirmed entries and reporting each outcome
//!
//! # Pipeline
//!
//! The retention cutoff is validated before the store is touched, so an
//! unrepresentable threshold never causes an enumeration, read or delete.
//!
//! ```
//! use credsweep_domain::{CredentialKind, FileTime, RawCredential};
//! use credsweep_janitor::{classify, InventoryBuilder, RetentionCutoff, SweepConfig};
//! use credsweep_store::MemoryStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SweepConfig::default();
//! let cutoff = RetentionCutoff::now(config.retention_days)?;
//!
//! let mut store = MemoryStore::new();
//! store.insert(
//!     RawCredential::new("Adobe App Info", 64, FileTime::new(0, 0), CredentialKind::GENERIC),
//!     "secret",
//! );
//!
//! let inventory = InventoryBuilder::new(&config.pattern).build(&store)?;
//! let stale = classify(&inventory.records, &cutoff);
//! assert_eq!(stale.len(), 1);
//! println!("{}", inventory.stats.summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```
//! use credsweep_janitor::SweepConfig;
//!
//! let config = SweepConfig::default();
//! assert_eq!(config.pattern, "Adobe*");
//! assert_eq!(config.retention_days, 180);
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod disposer;
mod error;
mod inventory;
mod stats;

pub use classifier::{classify, current_unix_micros, RetentionCutoff, HOURS_PER_DAY};
pub use config::{SweepConfig, DEFAULT_PATTERN, DEFAULT_RETENTION_DAYS, MAX_PATTERN_BYTES};
pub use disposer::{DisposalOutcome, Disposer};
pub use error::JanitorError;
pub use inventory::{Inventory, InventoryBuilder};
pub use stats::{
    estimated_footprint, format_significant, wide_len, InventoryStats, ATTRIBUTE_HEADER_SIZE,
    CREDENTIAL_HEADER_SIZE, WIDE_CHAR_SIZE,
};
