//! Windows Credential Manager adapter.
//!
//! Every buffer the Credential Manager hands back is owned by a
//! [`CredentialBuffer`] guard, so it is released with `CredFree` on every
//! exit path.

use crate::{Result, StoreError, ERROR_NOT_FOUND};
use credsweep_domain::{CredentialKind, FileTime, RawAttribute, RawCredential, SecretStore};
use std::ffi::c_void;
use std::ptr;
use tracing::debug;
use windows::core::{HSTRING, PCWSTR, PWSTR};
use windows::Win32::Security::Credentials::{
    CredDeleteW, CredEnumerateW, CredFree, CredReadW, CREDENTIALW, CRED_ENUMERATE_FLAGS,
    CRED_TYPE,
};

/// Facility code of HRESULTs wrapping Win32 error codes.
const FACILITY_WIN32: i32 = 7;

impl From<windows::core::Error> for StoreError {
    fn from(err: windows::core::Error) -> Self {
        let hr = err.code().0;
        let code = if (hr >> 16) & 0x1FFF == FACILITY_WIN32 {
            (hr & 0xFFFF) as u32
        } else {
            hr as u32
        };
        StoreError::Native {
            code,
            message: err.message().to_string().trim_end().to_string(),
        }
    }
}

/// Owns a buffer allocated by the Credential Manager.
struct CredentialBuffer<T>(*mut T);

impl<T> Drop for CredentialBuffer<T> {
    fn drop(&mut self) {
        if !self.0.is_null() {
            // SAFETY: the pointer was produced by CredEnumerateW/CredReadW and is freed once.
            unsafe { CredFree(self.0 as *const c_void) };
        }
    }
}

/// Credential Manager of the current user's logon session.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsCredentialStore;

impl WindowsCredentialStore {
    /// Create a handle to the current user's credential set.
    pub fn new() -> Self {
        Self
    }
}

impl SecretStore for WindowsCredentialStore {
    type Error = StoreError;

    fn enumerate(&self, pattern: &str) -> Result<Vec<RawCredential>> {
        let filter = HSTRING::from(pattern);
        let mut count = 0u32;
        let mut block: *mut *mut CREDENTIALW = ptr::null_mut();

        // SAFETY: out-pointers are valid locals; ownership of `block` moves into the guard.
        let result =
            unsafe { CredEnumerateW(PCWSTR(filter.as_ptr()), CRED_ENUMERATE_FLAGS(0), &mut count, &mut block) };
        let guard = CredentialBuffer(block);
        match result.map_err(StoreError::from) {
            // No entry matched the filter
            Err(err) if err.code() == Some(ERROR_NOT_FOUND) => return Ok(Vec::new()),
            Err(err) => return Err(err),
            Ok(()) => {}
        }

        if guard.0.is_null() || count == 0 {
            return Ok(Vec::new());
        }

        // SAFETY: CredEnumerateW returned `count` valid credential pointers.
        let entries = unsafe { std::slice::from_raw_parts(guard.0, count as usize) };
        let credentials = entries
            .iter()
            .map(|&entry| unsafe { raw_credential(&*entry) })
            .collect::<Vec<_>>();

        debug!(pattern, count = credentials.len(), "Enumerated Credential Manager");
        Ok(credentials)
    }

    fn read_value(&self, name: &str, kind: CredentialKind) -> Result<Vec<u8>> {
        let target = HSTRING::from(name);
        let mut credential: *mut CREDENTIALW = ptr::null_mut();

        // SAFETY: out-pointer is a valid local; ownership moves into the guard.
        let result = unsafe { CredReadW(PCWSTR(target.as_ptr()), CRED_TYPE(kind.value()), 0, &mut credential) };
        let guard = CredentialBuffer(credential);
        result?;

        if guard.0.is_null() {
            return Err(StoreError::NotFound(name.to_string()));
        }

        // SAFETY: CredReadW succeeded, so the pointer refers to a valid credential.
        let credential = unsafe { &*guard.0 };
        if credential.CredentialBlob.is_null() || credential.CredentialBlobSize == 0 {
            return Ok(Vec::new());
        }
        let blob = unsafe {
            std::slice::from_raw_parts(
                credential.CredentialBlob,
                credential.CredentialBlobSize as usize,
            )
        };
        Ok(blob.to_vec())
    }

    fn delete(&mut self, name: &str, kind: CredentialKind) -> Result<()> {
        let target = HSTRING::from(name);
        // SAFETY: plain call with an owned, NUL-terminated target name.
        unsafe { CredDeleteW(PCWSTR(target.as_ptr()), CRED_TYPE(kind.value()), 0) }?;
        Ok(())
    }
}

/// Copy a native credential into an owned raw entry.
///
/// # Safety
/// `credential` must point to a credential returned by the Credential Manager.
unsafe fn raw_credential(credential: &CREDENTIALW) -> RawCredential {
    let attributes = if credential.Attributes.is_null() {
        Vec::new()
    } else {
        std::slice::from_raw_parts(credential.Attributes, credential.AttributeCount as usize)
            .iter()
            .map(|attribute| RawAttribute {
                keyword: wide_string(attribute.Keyword),
                value_size: attribute.ValueSize,
            })
            .collect()
    };

    RawCredential {
        target_name: wide_string(credential.TargetName).unwrap_or_default(),
        comment: wide_string(credential.Comment),
        target_alias: wide_string(credential.TargetAlias),
        user_name: wide_string(credential.UserName),
        attributes,
        blob_size: credential.CredentialBlobSize,
        last_written: FileTime::new(
            credential.LastWritten.dwLowDateTime,
            credential.LastWritten.dwHighDateTime,
        ),
        kind: CredentialKind(credential.Type.0),
        persist: credential.Persist.0,
        flags: credential.Flags.0,
    }
}

/// Read a NUL-terminated wide string, `None` for a null pointer.
unsafe fn wide_string(value: PWSTR) -> Option<String> {
    if value.is_null() {
        None
    } else {
        Some(String::from_utf16_lossy(value.as_wide()))
    }
}
