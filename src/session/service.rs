//! Session service: the single writer of auth state and its persisted copy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once in `app::App`, handed a storage backend, and provided
//! through context to whatever needs it (route guards, header, login flow).
//! Every mutation keeps the persisted record and the in-memory state
//! consistent: login persists first and then updates memory, logout clears
//! storage first and then memory.
//!
//! ERROR HANDLING
//! ==============
//! An unreadable persisted record is discarded and treated as "no session";
//! it never escapes as an error. Write failures on login propagate to the
//! caller with memory left untouched.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::session::profile::{LoginFields, UserProfile};
use crate::session::storage::{SessionStorage, StorageError};
use crate::state::auth::AuthState;

/// Owns the authenticated-user record and its persistence.
///
/// `Copy` like the signals it wraps, so handlers and effects can capture it
/// without ceremony.
#[derive(Clone, Copy)]
pub struct SessionService {
    storage: StoredValue<Rc<dyn SessionStorage>, LocalStorage>,
    auth: RwSignal<AuthState>,
}

impl SessionService {
    /// Create a service over `storage`. The auth state starts in its
    /// loading phase until [`SessionService::restore`] runs.
    #[must_use]
    pub fn new(storage: Rc<dyn SessionStorage>) -> Self {
        Self {
            storage: StoredValue::new_local(storage),
            auth: RwSignal::new(AuthState::default()),
        }
    }

    /// The auth state signal. Read-only by convention everywhere outside
    /// this service.
    #[must_use]
    pub fn auth(&self) -> RwSignal<AuthState> {
        self.auth
    }

    /// Restore any persisted session. Invoked once at startup.
    ///
    /// An absent record leaves the session logged out; an unreadable record
    /// is erased so the next startup does not trip over it again. Either
    /// way the loading phase ends here.
    pub fn restore(&self) {
        let restored = match self.storage.with_value(|s| s.load()) {
            Ok(user) => user,
            Err(err) => {
                #[cfg(feature = "csr")]
                log::warn!("discarding unreadable session record: {err}");
                #[cfg(not(feature = "csr"))]
                let _ = err;
                self.storage.with_value(|s| s.clear());
                None
            }
        };
        self.auth.update(|a| {
            a.user = restored;
            a.loading = false;
        });
    }

    /// Create and persist a session for a verified login.
    ///
    /// The login fields are merged over the default profile template; a
    /// repeat call simply overwrites the session with the latest data.
    ///
    /// # Errors
    ///
    /// Propagates the storage write failure; the in-memory state is not
    /// changed in that case.
    pub fn login(&self, fields: &LoginFields) -> Result<(), StorageError> {
        let user = UserProfile::template().merged_with(fields);
        self.storage.with_value(|s| s.save(&user))?;
        self.auth.update(|a| a.user = Some(user));
        Ok(())
    }

    /// Erase the persisted session and reset to logged out.
    ///
    /// Safe to call when already logged out.
    pub fn logout(&self) {
        self.storage.with_value(|s| s.clear());
        self.auth.update(|a| a.user = None);
    }
}
