use super::*;

// =============================================================
// Helpers
// =============================================================

fn login_response_json() -> &'static str {
    r#"{
        "accessToken": "abc.def.ghi.jkl",
        "id": 7,
        "username": "alice",
        "email": "alice@talachi.example",
        "roles": ["ROLE_USER"],
        "balance": 1500.25,
        "accountNumber": "TAL-0000000042"
    }"#
}

fn transaction_json() -> &'static str {
    r#"{
        "transactionId": "9be2f4a1-3c55-4b1e-9f7e-0d6f25c3a111",
        "transactionType": "WIRE_TRANSFER",
        "fromAccountNumber": "TAL-0000000042",
        "toAccountNumber": "TAL-0000000007",
        "beneficiaryName": "ACME Inc.",
        "amount": 250.0,
        "currency": "EUR",
        "description": "Invoice 42",
        "initiatedAt": "2026-01-14T14:23:00Z",
        "status": "PENDING",
        "riskScore": 68,
        "signatureVerified": false
    }"#
}

// =============================================================
// AuthResponse
// =============================================================

#[test]
fn auth_response_deserializes_camel_case() {
    let resp: AuthResponse = serde_json::from_str(login_response_json()).unwrap();
    assert_eq!(resp.access_token, "abc.def.ghi.jkl");
    assert_eq!(resp.account_number.as_deref(), Some("TAL-0000000042"));
    assert!(resp.signature_metadata.is_none());
}

#[test]
fn auth_response_user_carries_profile_fields() {
    let resp: AuthResponse = serde_json::from_str(login_response_json()).unwrap();
    let user = resp.user();
    assert_eq!(user.id, 7);
    assert_eq!(user.username, "alice");
    assert_eq!(user.balance, Some(1500.25));
    assert_eq!(user.roles, vec!["ROLE_USER".to_owned()]);
}

#[test]
fn auth_response_rejects_missing_token() {
    let raw = r#"{"id": 7, "username": "alice", "email": "a@b.c"}"#;
    assert!(serde_json::from_str::<AuthResponse>(raw).is_err());
}

#[test]
fn auth_response_rejects_wrong_typed_id() {
    let raw = r#"{"accessToken": "a.b.c", "id": "seven", "username": "alice", "email": "a@b.c"}"#;
    assert!(serde_json::from_str::<AuthResponse>(raw).is_err());
}

// =============================================================
// User
// =============================================================

#[test]
fn user_round_trips_through_session_serialization() {
    let user = User {
        id: 7,
        username: "alice".to_owned(),
        email: "alice@talachi.example".to_owned(),
        roles: vec!["ROLE_USER".to_owned()],
        balance: Some(10.0),
        account_number: None,
    };
    let raw = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}

#[test]
fn display_role_strips_backend_prefix() {
    let mut user: User = serde_json::from_str(
        r#"{"id": 1, "username": "u", "email": "e", "roles": ["ROLE_ADMIN"]}"#,
    )
    .unwrap();
    assert_eq!(user.display_role(), "ADMIN");
    user.roles.clear();
    assert_eq!(user.display_role(), "USER");
}

// =============================================================
// Transaction
// =============================================================

#[test]
fn transaction_deserializes_full_payload() {
    let tx: Transaction = serde_json::from_str(transaction_json()).unwrap();
    assert_eq!(tx.status, "PENDING");
    assert_eq!(tx.risk_score, Some(68));
    assert!(!tx.signature_verified);
    assert!(tx.executed_at.is_none());
}

#[test]
fn transaction_accepts_float_risk_score_with_zero_fraction() {
    let raw = transaction_json().replace("\"riskScore\": 68", "\"riskScore\": 68.0");
    let tx: Transaction = serde_json::from_str(&raw).unwrap();
    assert_eq!(tx.risk_score, Some(68));
}

#[test]
fn transaction_rejects_fractional_risk_score() {
    let raw = transaction_json().replace("\"riskScore\": 68", "\"riskScore\": 68.5");
    assert!(serde_json::from_str::<Transaction>(&raw).is_err());
}

#[test]
fn transaction_rejects_string_amount() {
    let raw = transaction_json().replace("\"amount\": 250.0", "\"amount\": \"250\"");
    assert!(serde_json::from_str::<Transaction>(&raw).is_err());
}

#[test]
fn create_transaction_request_serializes_camel_case() {
    let req = CreateTransactionRequest {
        to_account_number: "TAL-0000000007".to_owned(),
        amount: 99.5,
        description: "rent".to_owned(),
        beneficiary_name: "Bob".to_owned(),
        transaction_type: "WIRE_TRANSFER".to_owned(),
        currency: "EUR".to_owned(),
    };
    let raw = serde_json::to_string(&req).unwrap();
    assert!(raw.contains("\"toAccountNumber\""));
    assert!(raw.contains("\"beneficiaryName\""));
    assert!(!raw.contains("to_account_number"));
}

// =============================================================
// Smaller payloads
// =============================================================

#[test]
fn balance_response_deserializes() {
    let raw = r#"{"balance": 12.5, "accountNumber": "TAL-1", "username": "alice", "email": "a@b.c"}"#;
    let resp: BalanceResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.balance, 12.5);
    assert_eq!(resp.account_number, "TAL-1");
}

#[test]
fn signing_key_tolerates_missing_optional_fields() {
    let raw = r#"{"id": 3, "status": "ACTIVE"}"#;
    let key: SigningKey = serde_json::from_str(raw).unwrap();
    assert_eq!(key.id, 3);
    assert!(key.public_key.is_none());
    assert!(key.usage_count.is_none());
}

#[test]
fn change_password_request_serializes_camel_case() {
    let req = ChangePasswordRequest {
        old_password: "old".to_owned(),
        new_password: "new-password".to_owned(),
    };
    let raw = serde_json::to_string(&req).unwrap();
    assert!(raw.contains("\"oldPassword\""));
    assert!(raw.contains("\"newPassword\""));
}
