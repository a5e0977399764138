//! Authentication operations over the gateway.
//!
//! Login persists the returned credential and profile through the injected
//! session store; logout is purely local; the backend session dies when the
//! token stops being presented.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::ApiError;
use super::gateway::Gateway;
use super::types::{AuthResponse, LoginRequest, MessageResponse, SignupRequest, User};

/// `POST /api/auth/login`, persisting the session on success.
pub async fn login(gateway: &Gateway, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
    let response: AuthResponse = gateway.post_json("/api/auth/login", credentials).await?;
    gateway.store().save(&response.access_token, &response.user());
    Ok(response)
}

/// `POST /api/auth/register`. Does not sign the new account in.
pub async fn register(gateway: &Gateway, signup: &SignupRequest) -> Result<MessageResponse, ApiError> {
    gateway.post_json("/api/auth/register", signup).await
}

/// Drop the local session: full token, light-token cookie, cached profile.
pub fn logout(gateway: &Gateway) {
    gateway.store().clear();
}

/// The cached profile from the session store, if any.
pub fn current_user(gateway: &Gateway) -> Option<User> {
    gateway.store().user()
}
