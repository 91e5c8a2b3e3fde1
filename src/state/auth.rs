//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Only the session service
//! (`session::service`) mutates this state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::profile::UserProfile;

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true only while the persisted session is being restored at
/// startup; guards must not redirect during that window.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// True iff a user record is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
