use super::*;

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn auth_state_pending_is_loading() {
    let state = AuthState::pending();
    assert!(state.user.is_none());
    assert!(state.loading);
}

#[test]
fn display_name_uses_user_name() {
    let state = AuthState {
        user: Some(SessionUser { id: "1".to_owned(), name: "admin".to_owned(), email: "admin@admin.local".to_owned() }),
        loading: false,
    };
    assert_eq!(state.display_name(), "admin");
    assert_eq!(AuthState::default().display_name(), "");
}
