//! Error taxonomy for calls through the HTTP gateway.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure modes surfaced to pages by the gateway.
///
/// Network and server errors become user-visible toasts; `Unauthorized` is
/// additionally handled by the gateway itself (session cleared, browser sent
/// back to the login page). There is no automatic retry anywhere.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, refused connection, aborted request).
    #[error("network error: {0}")]
    Network(String),

    /// No response within the gateway's fixed request timeout.
    #[error("request timed out")]
    Timeout,

    /// The backend rejected the credential (HTTP 401).
    #[error("session expired")]
    Unauthorized,

    /// Business or validation error reported by the backend.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for a user-facing toast.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
