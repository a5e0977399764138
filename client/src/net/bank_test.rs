use super::*;

#[test]
fn sign_endpoint_carries_key_id_query() {
    assert_eq!(
        sign_endpoint("9be2f4a1-3c55-4b1e-9f7e-0d6f25c3a111", 2),
        "/api/transactions/9be2f4a1-3c55-4b1e-9f7e-0d6f25c3a111/sign?keyId=2"
    );
}

#[test]
fn execute_endpoint_formats_expected_path() {
    assert_eq!(execute_endpoint("tx-1"), "/api/transactions/tx-1/execute");
}

#[test]
fn verify_endpoint_formats_expected_path() {
    assert_eq!(verify_endpoint("tx-1"), "/api/transactions/tx-1/verify");
}

#[test]
fn mutating_endpoints_are_never_public() {
    use crate::net::gateway::is_public_endpoint;

    assert!(!is_public_endpoint(&sign_endpoint("tx-1", 1)));
    assert!(!is_public_endpoint(&execute_endpoint("tx-1")));
    assert!(!is_public_endpoint(&verify_endpoint("tx-1")));
}
