//! Credential store adapters for credsweep.
//!
//! Provides the raw enumerate/read/delete access behind
//! [`credsweep_domain::SecretStore`]:
//! - Windows: Credential Manager (`CredEnumerateW`, `CredReadW`, `CredDeleteW`)
//! - Other platforms: a stub that reports the store as unavailable
//! - With the `test-util` feature: an in-memory store that records every call

mod error;

#[cfg(any(test, feature = "test-util"))]
mod memory;

#[cfg(windows)]
mod wincred;

#[cfg(not(windows))]
mod stub;

pub use error::{Result, StoreError, ERROR_NOT_FOUND};
#[cfg(any(test, feature = "test-util"))]
pub use memory::{MemoryStore, StoreCall};

#[cfg(windows)]
pub use wincred::WindowsCredentialStore;

#[cfg(not(windows))]
pub use stub::UnsupportedStore;

/// Store adapter for the platform this binary was built for.
#[cfg(windows)]
pub type PlatformStore = WindowsCredentialStore;

/// Store adapter for the platform this binary was built for.
#[cfg(not(windows))]
pub type PlatformStore = UnsupportedStore;

/// Open the platform credential store.
pub fn open_platform_store() -> PlatformStore {
    PlatformStore::new()
}
