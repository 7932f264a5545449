//! Trait definitions for external interactions
//!
//! These traits define the boundary between the audit logic and the platform
//! credential store. Implementations live in credsweep-store.

use crate::{CredentialKind, RawCredential};

/// Raw enumerate/read/delete access to a secret store
///
/// Implemented by the infrastructure layer (credsweep-store). Errors are
/// expected to carry the store's native error code in their display text.
pub trait SecretStore {
    /// Error type for store operations
    type Error;

    /// List every entry whose name matches the store-native wildcard pattern
    ///
    /// Either the full result set or an error; never a partial list.
    fn enumerate(&self, pattern: &str) -> Result<Vec<RawCredential>, Self::Error>;

    /// Read the secret value of one entry
    fn read_value(&self, name: &str, kind: CredentialKind) -> Result<Vec<u8>, Self::Error>;

    /// Delete one entry
    fn delete(&mut self, name: &str, kind: CredentialKind) -> Result<(), Self::Error>;
}
