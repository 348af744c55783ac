use super::*;
use crate::net::types::SessionUser;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::pending()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(SessionUser {
            id: "admin".to_owned(),
            name: "admin".to_owned(),
            email: "admin@energo-audit.by".to_owned(),
        }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}
