use std::rc::Rc;

use leptos::prelude::GetUntracked;

use super::*;
use crate::session::profile::{LoginFields, UserProfile};
use crate::session::service::SessionService;
use crate::session::storage::MemorySessionStorage;

fn logged_in() -> AuthState {
    AuthState {
        user: Some(UserProfile::template().merged_with(&LoginFields {
            mobile: "9876543210".to_owned(),
        })),
        loading: false,
    }
}

#[test]
fn evaluate_is_pending_while_session_restores() {
    let state = AuthState {
        user: None,
        loading: true,
    };
    assert_eq!(evaluate(&state, "/profile"), RouteDecision::Pending);
}

#[test]
fn evaluate_never_redirects_a_restoring_authenticated_user() {
    let state = AuthState {
        loading: true,
        ..logged_in()
    };
    assert_eq!(evaluate(&state, "/profile"), RouteDecision::Pending);
}

#[test]
fn evaluate_allows_authenticated_sessions() {
    assert_eq!(evaluate(&logged_in(), "/profile"), RouteDecision::Allowed);
}

#[test]
fn evaluate_denies_and_records_the_requested_path() {
    let state = AuthState {
        user: None,
        loading: false,
    };
    let decision = evaluate(&state, "/profile/family");
    assert_eq!(
        decision,
        RouteDecision::Denied(PendingNav {
            path: "/profile/family".to_owned(),
        })
    );
}

#[test]
fn resume_path_returns_the_pending_destination() {
    let pending = PendingNav {
        path: "/profile".to_owned(),
    };
    assert_eq!(resume_path(Some(pending)), "/profile");
}

#[test]
fn resume_path_defaults_to_home() {
    assert_eq!(resume_path(None), HOME_PATH);
}

#[test]
fn login_round_trip_resumes_the_denied_path() {
    let service = SessionService::new(Rc::new(MemorySessionStorage::new()));
    service.restore();

    // Visiting a protected page while logged out records the destination.
    let RouteDecision::Denied(nav) = evaluate(&service.auth().get_untracked(), "/profile") else {
        panic!("expected a denied decision");
    };

    // A successful verification logs in; the same attempt now passes and
    // navigation resumes at the recorded path, not the home page.
    service
        .login(&LoginFields {
            mobile: "9876543210".to_owned(),
        })
        .unwrap();
    assert_eq!(
        evaluate(&service.auth().get_untracked(), "/profile"),
        RouteDecision::Allowed
    );
    assert_eq!(resume_path(Some(nav)), "/profile");
}
