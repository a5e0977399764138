//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages apply identical unauthenticated redirect behavior on top
//! of the server-side route guard, so a client-side navigation that skips the
//! guard still lands on the login page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Whether a page should bounce to `/login`: auth has finished loading and
/// no user is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
