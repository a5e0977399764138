//! Single point through which all backend calls are issued.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway owns the base URL, the fixed request timeout, and the bearer
//! credential policy: every request to a non-public endpoint carries the
//! stored full token, while the login/register endpoints never receive a
//! credential even when one is cached, so a stale token cannot pollute a
//! fresh sign-in.
//!
//! On a 401 the gateway clears the session store and sends the browser back
//! to the login page. That policy lives here, in one place, so pages cannot
//! drift apart in how they treat an expired session.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::session::SessionStore;

/// Fallback when no base URL is baked in at build time.
const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Fixed per-request timeout.
#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Endpoints that must never carry a credential, even when one is cached.
const PUBLIC_ENDPOINTS: [&str; 2] = ["/api/auth/login", "/api/auth/register"];

/// Whether `path` targets one of the unauthenticated endpoints.
///
/// Substring match, so absolute URLs and relative paths both qualify.
pub fn is_public_endpoint(path: &str) -> bool {
    PUBLIC_ENDPOINTS.iter().any(|endpoint| path.contains(endpoint))
}

/// Join the configured base URL with an API path.
#[cfg(any(test, feature = "hydrate"))]
fn join_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// `Authorization` header value for a request, if one should be attached.
#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: Option<&str>, path: &str) -> Option<String> {
    match token {
        Some(token) if !token.is_empty() && !is_public_endpoint(path) => {
            Some(format!("Bearer {token}"))
        }
        _ => None,
    }
}

/// Fallback error text when a failure response has no `message` body.
#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Configured HTTP client for the banking API.
///
/// Cheap to clone; constructed once at the composition root with the session
/// store injected, then provided to pages via Leptos context.
#[derive(Clone, Debug)]
pub struct Gateway {
    base_url: String,
    store: SessionStore,
}

impl Gateway {
    /// Gateway against the build-time `API_URL`, falling back to the local
    /// development backend.
    pub fn new(store: SessionStore) -> Self {
        Self::with_base_url(option_env!("API_URL").unwrap_or(DEFAULT_API_URL), store)
    }

    /// Gateway against an explicit base URL.
    pub fn with_base_url(base_url: &str, store: SessionStore) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), store }
    }

    /// The session store this gateway reads its credential from.
    pub fn store(&self) -> SessionStore {
        self.store
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// `GET` returning a decoded JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::Request::get(&self.url(path));
            if let Some(header) = bearer_header(self.store.token().as_deref(), path) {
                builder = builder.header("Authorization", &header);
            }
            let request = builder.build().map_err(|e| ApiError::Network(e.to_string()))?;
            self.dispatch(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }

    /// `POST` with a JSON body, returning a decoded JSON body.
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::Request::post(&self.url(path));
            if let Some(header) = bearer_header(self.store.token().as_deref(), path) {
                builder = builder.header("Authorization", &header);
            }
            let request = builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?;
            self.dispatch(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }

    /// `POST` without a body (sign/execute style endpoints).
    pub async fn post_json_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::Request::post(&self.url(path));
            if let Some(header) = bearer_header(self.store.token().as_deref(), path) {
                builder = builder.header("Authorization", &header);
            }
            let request = builder.build().map_err(|e| ApiError::Network(e.to_string()))?;
            self.dispatch(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }

    /// Send with the fixed timeout, then decode.
    #[cfg(feature = "hydrate")]
    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: gloo_net::http::Request,
    ) -> Result<T, ApiError> {
        use futures::future::{Either, select};

        let send = Box::pin(request.send());
        let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS));
        let response = match select(send, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
            Either::Right(((), _)) => return Err(ApiError::Timeout),
        };
        self.decode(response).await
    }

    /// Map the response status and body into the error taxonomy.
    #[cfg(feature = "hydrate")]
    async fn decode<T: DeserializeOwned>(
        &self,
        response: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status == 401 {
            // Expired or rejected credential: drop the session and start over.
            self.store.clear();
            crate::util::nav::redirect_to("/login");
            return Err(ApiError::Unauthorized);
        }
        if !response.ok() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| request_failed_message(status));
            return Err(ApiError::Api { status, message });
        }
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Error payload shape shared by every backend failure response.
#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}
