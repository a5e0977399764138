//! Request-time route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before any page renders. The decision is stateless and synchronous:
//! it only checks for the *presence* of the light-token cookie, never its
//! validity or expiry; real authorization is re-checked by the backend on
//! every API call the client makes. Protected sections without a cookie
//! bounce to `/login` with the requested path as `callbackUrl`; the login
//! and registration pages bounce an already-authenticated browser to the
//! dashboard.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

/// Cookie carrying the light token, written by the client session store.
const TOKEN_COOKIE: &str = "token";

/// URL prefixes that require an authenticated session.
const PROTECTED_PREFIXES: [&str; 6] = [
    "/dashboard",
    "/transactions",
    "/sign-transaction",
    "/verify-transaction",
    "/settings",
    "/account",
];

/// Pages an authenticated browser is bounced away from. Exact matches.
const AUTH_PAGES: [&str; 2] = ["/login", "/register"];

/// Outcome of the guard for one navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation proceed unmodified.
    Allow,
    /// Redirect to the contained target.
    Redirect(String),
}

fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

fn is_auth_page(path: &str) -> bool {
    AUTH_PAGES.contains(&path)
}

/// Login redirect carrying the originally requested path.
fn login_redirect_target(path: &str) -> String {
    format!("/login?callbackUrl={path}")
}

/// Evaluate the guard for a request path and cookie presence.
pub fn decide(path: &str, has_token: bool) -> GuardDecision {
    if is_protected(path) && !has_token {
        return GuardDecision::Redirect(login_redirect_target(path));
    }
    if is_auth_page(path) && has_token {
        return GuardDecision::Redirect("/dashboard".to_owned());
    }
    GuardDecision::Allow
}

/// Axum middleware applying [`decide`] to every page request.
pub async fn route_guard(jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    let has_token = jar
        .get(TOKEN_COOKIE)
        .is_some_and(|cookie| !cookie.value().is_empty());

    match decide(path, has_token) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect(target) => {
            tracing::debug!(%path, has_token, %target, "route guard redirect");
            Redirect::temporary(&target).into_response()
        }
    }
}
