//! In-memory credential store.
//!
//! Behaves like the Credential Manager for the operations credsweep uses:
//! case-insensitive `*` wildcard enumeration, reads and deletes keyed by name
//! and kind. Every call is recorded so tests can assert which store
//! operations a run performed.

use crate::{Result, StoreError};
use credsweep_domain::{CredentialKind, RawCredential, SecretStore};
use std::cell::RefCell;
use std::collections::HashMap;

/// One recorded store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    /// `enumerate(pattern)`
    Enumerate(String),
    /// `read_value(name, kind)`
    Read(String, CredentialKind),
    /// `delete(name, kind)`
    Delete(String, CredentialKind),
}

#[derive(Debug, Clone)]
struct StoredEntry {
    raw: RawCredential,
    value: Vec<u8>,
}

/// In-memory store keyed by credential name.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<StoredEntry>,
    calls: RefCell<Vec<StoreCall>>,
    enumeration_failure: Option<u32>,
    delete_failures: HashMap<String, u32>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry with its secret value.
    pub fn insert(&mut self, raw: RawCredential, value: impl Into<Vec<u8>>) {
        self.entries.retain(|e| !same_name(&e.raw.target_name, &raw.target_name));
        self.entries.push(StoredEntry {
            raw,
            value: value.into(),
        });
    }

    /// Make every enumeration fail with the given native code.
    pub fn fail_enumeration(&mut self, code: u32) {
        self.enumeration_failure = Some(code);
    }

    /// Make deletes of one name fail with the given native code.
    pub fn fail_delete(&mut self, name: impl Into<String>, code: u32) {
        let name: String = name.into();
        self.delete_failures.insert(fold(&name), code);
    }

    /// Whether an entry with this name is still stored.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| same_name(&e.raw.target_name, name))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.borrow().clone()
    }

    /// Names passed to `delete`, in order.
    pub fn deleted_names(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                StoreCall::Delete(name, _) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: StoreCall) {
        self.calls.borrow_mut().push(call);
    }

    fn find(&self, name: &str, kind: CredentialKind) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| same_name(&e.raw.target_name, name) && e.raw.kind == kind)
    }
}

impl SecretStore for MemoryStore {
    type Error = StoreError;

    fn enumerate(&self, pattern: &str) -> Result<Vec<RawCredential>> {
        self.record(StoreCall::Enumerate(pattern.to_string()));

        if let Some(code) = self.enumeration_failure {
            return Err(StoreError::Native {
                code,
                message: "Enumeration failed".to_string(),
            });
        }

        Ok(self
            .entries
            .iter()
            .filter(|e| wildcard_match(pattern, &e.raw.target_name))
            .map(|e| e.raw.clone())
            .collect())
    }

    fn read_value(&self, name: &str, kind: CredentialKind) -> Result<Vec<u8>> {
        self.record(StoreCall::Read(name.to_string(), kind));
        self.find(name, kind)
            .map(|i| self.entries[i].value.clone())
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn delete(&mut self, name: &str, kind: CredentialKind) -> Result<()> {
        self.record(StoreCall::Delete(name.to_string(), kind));

        if let Some(&code) = self.delete_failures.get(&fold(name)) {
            return Err(StoreError::Native {
                code,
                message: "Delete failed".to_string(),
            });
        }

        match self.find(name, kind) {
            Some(i) => {
                self.entries.remove(i);
                Ok(())
            }
            None => Err(StoreError::NotFound(name.to_string())),
        }
    }
}

/// Case folding shared by every name comparison.
fn fold(name: &str) -> String {
    name.to_lowercase()
}

fn same_name(a: &str, b: &str) -> bool {
    fold(a) == fold(b)
}

/// Case-insensitive match where `*` stands for any run of characters.
fn wildcard_match(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = fold(pattern).chars().collect();
    let name: Vec<char> = fold(name).chars().collect();

    let (mut p, mut n) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        if p < pattern.len() && pattern[p] == '*' {
            backtrack = Some((p, n));
            p += 1;
        } else if p < pattern.len() && pattern[p] == name[n] {
            p += 1;
            n += 1;
        } else if let Some((star, matched)) = backtrack {
            p = star + 1;
            n = matched + 1;
            backtrack = Some((star, matched + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}
