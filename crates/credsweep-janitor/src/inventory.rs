//! Inventory of the entries matching a pattern

use crate::{InventoryStats, JanitorError};
use credsweep_domain::{CredentialRecord, SecretStore};
use std::fmt::Display;

/// Records and aggregate statistics from one enumeration pass
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    /// One record per enumerated entry, in enumeration order
    pub records: Vec<CredentialRecord>,
    /// Payload and estimated footprint totals
    pub stats: InventoryStats,
}

/// Builds an [`Inventory`] from a single enumeration pass
///
/// # Examples
///
/// ```
/// use credsweep_domain::{CredentialKind, FileTime, RawCredential};
/// use credsweep_janitor::InventoryBuilder;
/// use credsweep_store::MemoryStore;
///
/// let mut store = MemoryStore::new();
/// store.insert(RawCredential::new("Test A", 10, FileTime::default(), CredentialKind::GENERIC), "v");
///
/// let inventory = InventoryBuilder::new("Test*").build(&store).unwrap();
/// assert_eq!(inventory.records.len(), 1);
/// assert_eq!(inventory.stats.total_payload_bytes, 10);
/// ```
pub struct InventoryBuilder {
    pattern: String,
}

impl InventoryBuilder {
    /// Create a builder for the given store-native wildcard pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Enumerate the store and build the inventory
    ///
    /// An enumeration failure yields an error and no records at all.
    pub fn build<S: SecretStore>(&self, store: &S) -> Result<Inventory, JanitorError>
    where
        S::Error: Display,
    {
        let raw_entries = store.enumerate(&self.pattern).map_err(|e| {
            tracing::error!(pattern = %self.pattern, error = %e, "Enumeration failed");
            JanitorError::Enumeration(e.to_string())
        })?;

        let mut inventory = Inventory {
            records: Vec::with_capacity(raw_entries.len()),
            stats: InventoryStats::new(),
        };

        for raw in &raw_entries {
            tracing::debug!(
                target_name = %raw.target_name,
                persist = raw.persist,
                kind = %raw.kind,
                flags = raw.flags,
                blob_size = raw.blob_size,
                "Credential"
            );

            inventory.stats.record(raw);
            inventory.records.push(CredentialRecord::from(raw));
        }

        tracing::info!(
            pattern = %self.pattern,
            count = inventory.records.len(),
            payload_bytes = inventory.stats.total_payload_bytes,
            estimated_bytes = inventory.stats.estimated_total_bytes,
            "Inventory built"
        );

        Ok(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{estimated_footprint, CREDENTIAL_HEADER_SIZE};
    use credsweep_domain::{CredentialKind, FileTime, RawAttribute, RawCredential};
    use credsweep_store::{MemoryStore, StoreCall};

    fn raw(name: &str, size: u32) -> RawCredential {
        RawCredential::new(name, size, FileTime::new(1, 2), CredentialKind::GENERIC)
    }

    #[test]
    fn test_build_preserves_enumeration_order() {
        let mut store = MemoryStore::new();
        store.insert(raw("Test A", 100), "a");
        store.insert(raw("Test B", 50), "b");
        store.insert(raw("Other", 10), "c");

        let inventory = InventoryBuilder::new("Test*").build(&store).unwrap();

        let names: Vec<&str> = inventory.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Test A", "Test B"]);
        assert_eq!(inventory.records[0].last_written, FileTime::new(1, 2));
        assert_eq!(inventory.stats.record_count, 2);
        assert_eq!(inventory.stats.total_payload_bytes, 150);
    }

    #[test]
    fn test_estimate_matches_per_entry_sum() {
        let mut with_metadata = raw("Test A", 100);
        with_metadata.user_name = Some("alice".to_string());
        with_metadata.attributes.push(RawAttribute {
            keyword: Some("k".to_string()),
            value_size: 3,
        });
        let plain = raw("Test B", 7);

        let expected = estimated_footprint(&with_metadata) + estimated_footprint(&plain);

        let mut store = MemoryStore::new();
        store.insert(with_metadata, "a");
        store.insert(plain, "b");

        let inventory = InventoryBuilder::new("Test*").build(&store).unwrap();
        assert_eq!(inventory.stats.estimated_total_bytes, expected);
        assert_eq!(
            expected,
            (100 + 12 + 10 + (2 + 3 + 24) + CREDENTIAL_HEADER_SIZE) + (7 + 12 + CREDENTIAL_HEADER_SIZE)
        );
    }

    #[test]
    fn test_enumeration_failure_yields_no_records() {
        let mut store = MemoryStore::new();
        store.insert(raw("Test A", 100), "a");
        store.fail_enumeration(1312);

        let err = InventoryBuilder::new("Test*").build(&store).unwrap_err();
        match err {
            JanitorError::Enumeration(msg) => assert!(msg.contains("1312")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.calls(), vec![StoreCall::Enumerate("Test*".to_string())]);
    }

    #[test]
    fn test_no_matches_is_empty_inventory() {
        let store = MemoryStore::new();
        let inventory = InventoryBuilder::new("Nothing*").build(&store).unwrap();
        assert!(inventory.records.is_empty());
        assert_eq!(inventory.stats, InventoryStats::new());
    }
}
