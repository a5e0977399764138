//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrated once from the session store at startup, then kept current by
//! login/logout and balance refreshes. Pages use it to coordinate login
//! redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{BalanceResponse, User};

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true until the session store has been consulted, so pages
/// can distinguish "still hydrating" from "definitely signed out".
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Whether a signed-in user is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Merge a balance refresh into the cached profile.
    ///
    /// Only the balance-bearing fields change; identity fields are kept.
    /// A refresh that lands after logout is dropped.
    pub fn apply_balance(&mut self, refresh: &BalanceResponse) {
        if let Some(user) = &mut self.user {
            user.balance = Some(refresh.balance);
            user.account_number = Some(refresh.account_number.clone());
        }
    }
}
