//! Credential kind - the store's category tag for an entry

use std::fmt;

/// Integer category tag the store attaches to each credential
///
/// The tag matters when reading a value back (reads are keyed by name and
/// kind). Deletion always uses [`DELETE_CATEGORY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CredentialKind(pub u32);

impl CredentialKind {
    /// Generic credential, application-defined
    pub const GENERIC: Self = Self(1);
    /// Domain password
    pub const DOMAIN_PASSWORD: Self = Self(2);
    /// Domain certificate
    pub const DOMAIN_CERTIFICATE: Self = Self(3);
    /// Domain password readable by the owning user
    pub const DOMAIN_VISIBLE_PASSWORD: Self = Self(4);
    /// Generic certificate
    pub const GENERIC_CERTIFICATE: Self = Self(5);
    /// Extended domain credential
    pub const DOMAIN_EXTENDED: Self = Self(6);

    /// Raw tag value
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Human-readable name, if the tag is one the store documents
    pub fn label(&self) -> Option<&'static str> {
        match self.0 {
            1 => Some("generic"),
            2 => Some("domain-password"),
            3 => Some("domain-certificate"),
            4 => Some("domain-visible-password"),
            5 => Some("generic-certificate"),
            6 => Some("domain-extended"),
            _ => None,
        }
    }
}

impl Default for CredentialKind {
    fn default() -> Self {
        Self::GENERIC
    }
}

impl From<u32> for CredentialKind {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "unknown({})", self.0),
        }
    }
}

/// Category passed to every delete call, regardless of the record's own kind
///
/// Entries of other kinds matched by the enumeration pattern will fail to
/// delete under this category. Known limitation, kept as is.
pub const DELETE_CATEGORY: CredentialKind = CredentialKind::GENERIC;
