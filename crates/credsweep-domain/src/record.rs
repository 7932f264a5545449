//! Credential records - raw store entries and their normalized form

use crate::{CredentialKind, FileTime};

/// One attribute attached to a raw credential
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawAttribute {
    /// Attribute keyword; the store allows it to be absent
    pub keyword: Option<String>,
    /// Size of the attribute value in bytes
    pub value_size: u32,
}

/// A credential entry exactly as the store enumerates it
///
/// Carries the metadata needed for footprint estimation. The secret value
/// is not part of enumeration output; see [`crate::SecretStore::read_value`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawCredential {
    /// Store key of the entry
    pub target_name: String,
    /// Optional free-text comment
    pub comment: Option<String>,
    /// Optional alias for the target
    pub target_alias: Option<String>,
    /// Optional user name
    pub user_name: Option<String>,
    /// Application-defined attributes
    pub attributes: Vec<RawAttribute>,
    /// Size of the stored secret in bytes
    pub blob_size: u32,
    /// Last write time in native ticks
    pub last_written: FileTime,
    /// Category tag
    pub kind: CredentialKind,
    /// Persistence scope tag
    pub persist: u32,
    /// Store flags
    pub flags: u32,
}

impl RawCredential {
    /// Create a raw entry with no optional metadata
    pub fn new(
        target_name: impl Into<String>,
        blob_size: u32,
        last_written: FileTime,
        kind: CredentialKind,
    ) -> Self {
        Self {
            target_name: target_name.into(),
            blob_size,
            last_written,
            kind,
            ..Default::default()
        }
    }
}

/// Normalized inventory entry used by classification and review
///
/// Created once per enumeration and never mutated. After a successful delete
/// the record no longer describes anything in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    /// Unique store key, used for every later read or delete
    pub name: String,
    /// Byte length of the stored secret
    pub payload_size: u32,
    /// Last write time in native ticks
    pub last_written: FileTime,
    /// Category tag reported by the store
    pub kind: CredentialKind,
}

impl CredentialRecord {
    /// Last write time as microseconds since the Unix epoch
    pub fn last_written_micros(&self) -> i64 {
        self.last_written.to_unix_micros()
    }
}

impl From<&RawCredential> for CredentialRecord {
    fn from(raw: &RawCredential) -> Self {
        Self {
            name: raw.target_name.clone(),
            payload_size: raw.blob_size,
            last_written: raw.last_written,
            kind: raw.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_raw() {
        let mut raw = RawCredential::new(
            "Adobe App Info",
            512,
            FileTime::new(7, 3),
            CredentialKind::GENERIC,
        );
        raw.comment = Some("ignored".to_string());

        let record = CredentialRecord::from(&raw);
        assert_eq!(record.name, "Adobe App Info");
        assert_eq!(record.payload_size, 512);
        assert_eq!(record.last_written, FileTime::new(7, 3));
        assert_eq!(record.kind, CredentialKind::GENERIC);
    }
}
