//! Deletion of confirmed records

use credsweep_domain::{CredentialKind, CredentialRecord, SecretStore, DELETE_CATEGORY};
use std::fmt::Display;

/// Result of one delete attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisposalOutcome {
    /// The entry was removed from the store
    Deleted {
        /// Name of the deleted entry
        name: String,
    },

    /// The store refused the delete; the session continues
    Failed {
        /// Name of the entry
        name: String,
        /// Store error text, native code included
        error: String,
    },
}

impl DisposalOutcome {
    /// Whether the delete succeeded
    pub fn is_deleted(&self) -> bool {
        matches!(self, DisposalOutcome::Deleted { .. })
    }

    /// Name of the entry this outcome refers to
    pub fn name(&self) -> &str {
        match self {
            DisposalOutcome::Deleted { name } | DisposalOutcome::Failed { name, .. } => name,
        }
    }
}

/// Issues store deletes for confirmed records
///
/// Every delete uses [`DELETE_CATEGORY`] rather than the record's own kind,
/// so entries of other categories matched by the pattern will fail to delete.
#[derive(Debug, Clone, Copy)]
pub struct Disposer {
    category: CredentialKind,
}

impl Default for Disposer {
    fn default() -> Self {
        Self::new()
    }
}

impl Disposer {
    /// Create a disposer using the fixed delete category
    pub fn new() -> Self {
        Self {
            category: DELETE_CATEGORY,
        }
    }

    /// Delete one record; failures are reported, never propagated
    pub fn dispose<S: SecretStore>(&self, store: &mut S, record: &CredentialRecord) -> DisposalOutcome
    where
        S::Error: Display,
    {
        match store.delete(&record.name, self.category) {
            Ok(()) => {
                tracing::info!(name = %record.name, size = record.payload_size, "Deleted credential");
                DisposalOutcome::Deleted {
                    name: record.name.clone(),
                }
            }
            Err(e) => {
                tracing::warn!(name = %record.name, error = %e, "Failed to delete credential");
                DisposalOutcome::Failed {
                    name: record.name.clone(),
                    error: e.to_string(),
                }
            }
        }
    }
}
