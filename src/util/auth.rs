//! Route-protection decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same gate: wait out the session
//! restore, render for an authenticated user, redirect everyone else to
//! the login flow while remembering where they were headed. The decision
//! itself is a pure function of auth state + requested path so it stays
//! testable; `components::require_auth` does the rendering and the actual
//! navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

/// Application home path, the fallback destination after login.
pub const HOME_PATH: &str = "/";

/// Login entry point protected routes redirect to.
pub const LOGIN_PATH: &str = "/login";

/// The originally requested protected path, carried through the login flow
/// so the user lands back where they intended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingNav {
    pub path: String,
}

/// Outcome of evaluating a navigation attempt against the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session restore has not finished; render nothing and do not redirect.
    Pending,
    /// Authenticated; render the protected content.
    Allowed,
    /// Unauthenticated; redirect to login, remembering the requested path.
    Denied(PendingNav),
}

/// Decide whether `requested_path` may render for the current session.
#[must_use]
pub fn evaluate(state: &AuthState, requested_path: &str) -> RouteDecision {
    if state.loading {
        return RouteDecision::Pending;
    }
    if state.is_authenticated() {
        RouteDecision::Allowed
    } else {
        RouteDecision::Denied(PendingNav {
            path: requested_path.to_owned(),
        })
    }
}

/// Where to navigate after a successful login: the recorded pending path,
/// or home when the user came to the login page directly.
#[must_use]
pub fn resume_path(pending: Option<PendingNav>) -> String {
    pending.map_or_else(|| HOME_PATH.to_owned(), |nav| nav.path)
}
