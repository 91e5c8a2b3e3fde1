use super::*;
use crate::session::profile::{LoginFields, UserProfile};

#[test]
fn default_state_is_loading_and_logged_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn is_authenticated_iff_user_present() {
    let user = UserProfile::template().merged_with(&LoginFields {
        mobile: "9876543210".to_owned(),
    });
    let state = AuthState {
        user: Some(user),
        loading: false,
    };
    assert!(state.is_authenticated());

    let state = AuthState {
        user: None,
        loading: false,
    };
    assert!(!state.is_authenticated());
}
