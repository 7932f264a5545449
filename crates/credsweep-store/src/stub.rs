//! Stub implementation for non-Windows platforms.
//!
//! Lets the CLI build everywhere; every operation reports that no credential
//! store is available.

use crate::{Result, StoreError};
use credsweep_domain::{CredentialKind, RawCredential, SecretStore};

/// Placeholder store for platforms without a Credential Manager.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedStore;

impl UnsupportedStore {
    /// Create the stub store.
    pub fn new() -> Self {
        Self
    }
}

impl SecretStore for UnsupportedStore {
    type Error = StoreError;

    fn enumerate(&self, pattern: &str) -> Result<Vec<RawCredential>> {
        tracing::debug!(pattern, "No credential store on this platform");
        Err(StoreError::NotAvailable)
    }

    fn read_value(&self, _name: &str, _kind: CredentialKind) -> Result<Vec<u8>> {
        Err(StoreError::NotAvailable)
    }

    fn delete(&mut self, _name: &str, _kind: CredentialKind) -> Result<()> {
        Err(StoreError::NotAvailable)
    }
}
