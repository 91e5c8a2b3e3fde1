//! Persistence adapters for the login session.
//!
//! DESIGN
//! ======
//! The session service talks to a small `load`/`save`/`clear` seam instead
//! of `localStorage` directly, so the browser backend can be swapped for an
//! in-process one in tests (or a different store later) without touching
//! session logic. `load` distinguishes an absent record (`Ok(None)`) from a
//! corrupt one (`Err`); the service decides what to do about corruption.
//!
//! ERROR HANDLING
//! ==============
//! `clear` is best-effort and infallible. Write failures surface as
//! `StorageError` since no recovery semantics exist for them client-side.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;

use crate::session::profile::UserProfile;

/// Fixed key for the persisted session record.
pub const SESSION_KEY: &str = "curo24_user";

/// Failures surfaced by a session storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("stored session is not valid JSON: {0}")]
    Corrupt(String),
    #[error("browser storage unavailable")]
    Unavailable,
    #[error("failed to write session: {0}")]
    Write(String),
}

/// Durable home of the session record.
pub trait SessionStorage {
    /// Read the persisted session. `Ok(None)` means no record exists;
    /// `Err` means a record exists but cannot be understood (or the
    /// backend cannot be reached).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Corrupt`] for an unparseable record and
    /// [`StorageError::Unavailable`] when the backend is missing.
    fn load(&self) -> Result<Option<UserProfile>, StorageError>;

    /// Persist `profile`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] or [`StorageError::Unavailable`]
    /// when the record cannot be written.
    fn save(&self, profile: &UserProfile) -> Result<(), StorageError>;

    /// Remove the persisted record. Safe to call when none exists.
    fn clear(&self);
}

/// Browser `localStorage` backend under [`SESSION_KEY`].
///
/// Off-browser builds see an empty, unwritable store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStorage;

impl LocalSessionStorage {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[cfg(feature = "csr")]
    fn backend() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl SessionStorage for LocalSessionStorage {
    fn load(&self) -> Result<Option<UserProfile>, StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = Self::backend().ok_or(StorageError::Unavailable)?;
            let Ok(Some(raw)) = storage.get_item(SESSION_KEY) else {
                return Ok(None);
            };
            serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StorageError::Corrupt(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    fn save(&self, profile: &UserProfile) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = Self::backend().ok_or(StorageError::Unavailable)?;
            let raw = serde_json::to_string(profile).map_err(|e| StorageError::Write(e.to_string()))?;
            storage
                .set_item(SESSION_KEY, &raw)
                .map_err(|_| StorageError::Write("localStorage rejected the record".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = profile;
            Err(StorageError::Unavailable)
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = Self::backend() {
                let _ = storage.remove_item(SESSION_KEY);
            }
        }
    }
}

/// In-process backend holding the raw serialized record.
///
/// Used by tests (it can be seeded with malformed payloads) and available
/// as a swappable backend for non-browser hosts.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    cell: RefCell<Option<String>>,
}

impl MemorySessionStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an arbitrary raw payload, valid or not.
    #[must_use]
    pub fn with_raw(raw: &str) -> Self {
        Self {
            cell: RefCell::new(Some(raw.to_owned())),
        }
    }

    /// The raw persisted payload, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.cell.borrow().clone()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Result<Option<UserProfile>, StorageError> {
        match self.cell.borrow().as_deref() {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| StorageError::Corrupt(e.to_string())),
        }
    }

    fn save(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let raw = serde_json::to_string(profile).map_err(|e| StorageError::Write(e.to_string()))?;
        *self.cell.borrow_mut() = Some(raw);
        Ok(())
    }

    fn clear(&self) {
        *self.cell.borrow_mut() = None;
    }
}
