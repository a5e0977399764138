use super::*;

#[test]
fn api_error_displays_backend_message_verbatim() {
    let err = ApiError::Api { status: 400, message: "Insufficient funds".to_owned() };
    assert_eq!(err.user_message(), "Insufficient funds");
}

#[test]
fn timeout_has_fixed_message() {
    assert_eq!(ApiError::Timeout.user_message(), "request timed out");
}

#[test]
fn unauthorized_reads_as_expired_session() {
    assert_eq!(ApiError::Unauthorized.user_message(), "session expired");
}

#[test]
fn network_error_includes_cause() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.user_message(), "network error: connection refused");
}
