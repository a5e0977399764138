use super::*;
use crate::net::types::User;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(User {
            id: 7,
            username: "alice".to_owned(),
            email: "alice@talachi.example".to_owned(),
            roles: vec!["ROLE_USER".to_owned()],
            balance: None,
            account_number: None,
        }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}
