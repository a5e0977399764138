//! Browser session store for the access token and cached user profile.
//!
//! DESIGN
//! ======
//! The full access token lives in `localStorage` (no practical size limit);
//! a truncated "light" copy lives in the `token` cookie so the SSR host's
//! route guard can gate navigation without ever seeing the full credential.
//! The store is the only writer of both, which keeps the light token a
//! prefix-consistent subset of the full one.
//!
//! All operations are hydrate-only storage access; SSR paths return absent
//! and writes no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// `localStorage` key for the full access token.
#[cfg(feature = "hydrate")]
const ACCESS_TOKEN_KEY: &str = "accessToken";
/// `localStorage` key for the JSON-serialized user profile.
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "user";
/// Cookie holding the light token, read by the route guard.
#[cfg(any(test, feature = "hydrate"))]
const TOKEN_COOKIE: &str = "token";

/// Number of leading '.'-separated token segments kept in the cookie.
///
/// The token is structurally `payload.payload.signature` where the signature
/// segment alone can push the whole credential past the ~4KB cookie ceiling.
/// The guard only checks presence, so the first three segments are enough.
const LIGHT_TOKEN_SEGMENTS: usize = 3;

/// Cookie lifetime: 7 days.
#[cfg(any(test, feature = "hydrate"))]
const COOKIE_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

/// Derive the cookie-resident light token from a full access token.
///
/// Takes the first three '.'-separated segments, joined by the same
/// delimiter. Tokens with fewer segments pass through unchanged.
pub fn light_token(token: &str) -> String {
    token
        .split('.')
        .take(LIGHT_TOKEN_SEGMENTS)
        .collect::<Vec<_>>()
        .join(".")
}

/// Serialized `Set-Cookie`-style assignment for the light token.
#[cfg(any(test, feature = "hydrate"))]
fn token_cookie_value(light: &str) -> String {
    format!("{TOKEN_COOKIE}={light}; Max-Age={COOKIE_MAX_AGE_SECS}; Path=/; SameSite=Lax")
}

/// Cookie assignment that expires the light token immediately.
#[cfg(any(test, feature = "hydrate"))]
fn clear_cookie_value() -> String {
    format!("{TOKEN_COOKIE}=; Max-Age=0; Path=/; SameSite=Lax")
}

/// Handle over the browser-resident session.
///
/// Stateless by itself: every call goes straight to `localStorage` and
/// `document.cookie`. Passed around explicitly (via Leptos context and
/// injected into the gateway) rather than reached for as an ambient global.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore;

impl SessionStore {
    /// Persist a freshly issued token and its user profile.
    ///
    /// Writes the full token and the serialized user to `localStorage` and
    /// the derived light token to the `token` cookie.
    pub fn save(&self, token: &str, user: &User) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
                if let Ok(raw) = serde_json::to_string(user) {
                    let _ = storage.set_item(USER_KEY, &raw);
                }
            }
            write_cookie(&token_cookie_value(&light_token(token)));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, user);
        }
    }

    /// The full access token, or `None` outside a browser context.
    pub fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(ACCESS_TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    /// The cached user profile, or `None` if absent or outside a browser.
    pub fn user(&self) -> Option<User> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(USER_KEY).ok().flatten()?;
            serde_json::from_str(&raw).ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    /// Overwrite the cached user profile, leaving the token untouched.
    pub fn update_user(&self, user: &User) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if let Ok(raw) = serde_json::to_string(user) {
                    let _ = storage.set_item(USER_KEY, &raw);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
        }
    }

    /// Remove the token, the light-token cookie, and the cached user.
    /// Idempotent.
    pub fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(ACCESS_TOKEN_KEY);
                let _ = storage.remove_item(USER_KEY);
            }
            write_cookie(&clear_cookie_value());
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn write_cookie(assignment: &str) {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(html_doc) = doc.dyn_into::<web_sys::HtmlDocument>() {
        let _ = html_doc.set_cookie(assignment);
    }
}
