//! credsweep Domain Layer
//!
//! Core data model for auditing the platform credential store. This crate has
//! no runtime dependencies and defines the values and trait boundaries that the
//! store adapters, the janitor and the CLI all build on.
//!
//! ## Key Concepts
//!
//! - **Raw credential**: one entry exactly as the store enumerates it, metadata included
//! - **Credential record**: the normalized view used for classification and review
//! - **File time**: the store's native 100ns tick count since 1601-01-01
//! - **Credential kind**: the store's integer category tag
//! - **Secret store**: the enumerate/read/delete boundary to the platform facility

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kind;
pub mod record;
pub mod timestamp;
pub mod traits;

// Re-exports for convenience
pub use kind::{CredentialKind, DELETE_CATEGORY};
pub use record::{CredentialRecord, RawAttribute, RawCredential};
pub use timestamp::{FileTime, EPOCH_DIFFERENCE_MICROS};
pub use traits::SecretStore;
