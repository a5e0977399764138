//! Typed DTOs for the banking API boundary.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON; every payload is deserialized into an
//! explicit record here so malformed responses are rejected at the boundary
//! instead of leaking untyped data into page state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated account holder as cached in the session store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend user identifier.
    pub id: i64,
    /// Login name, also shown in the top bar.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Authority roles (e.g. `"ROLE_USER"`).
    #[serde(default)]
    pub roles: Vec<String>,
    /// Current balance; absent until the first balance refresh.
    #[serde(default)]
    pub balance: Option<f64>,
    /// IBAN-like account number; absent until the first balance refresh.
    #[serde(default)]
    pub account_number: Option<String>,
}

impl User {
    /// First role with the backend's `ROLE_` prefix stripped, for display.
    pub fn display_role(&self) -> String {
        self.roles
            .first()
            .map(|r| r.strip_prefix("ROLE_").unwrap_or(r).to_owned())
            .unwrap_or_else(|| "USER".to_owned())
    }
}

/// `POST /api/auth/login` request body.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /api/auth/register` request body.
#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful login payload: the credential plus a flattened user profile.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Full access token (`payload.payload.signature`, segments may be large).
    pub access_token: String,
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub account_number: Option<String>,
    /// Present only when the backend reports signing telemetry.
    #[serde(default)]
    pub signature_metadata: Option<SignatureMetadata>,
}

impl AuthResponse {
    /// The user profile portion, as persisted by the session store.
    pub fn user(&self) -> User {
        User {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            roles: self.roles.clone(),
            balance: self.balance,
            account_number: self.account_number.clone(),
        }
    }
}

/// Backend-supplied SDitH signing telemetry. Never fabricated client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureMetadata {
    /// Algorithm name, e.g. `"SDitH-128"`.
    pub algorithm: String,
    pub key_shares_generated: i64,
    /// Signature size in bytes.
    pub signature_size: i64,
    /// Generation time in milliseconds.
    pub generation_time: i64,
    pub syndrome_length: i64,
}

/// Plain acknowledgement body (`register`, `change-password`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `GET /api/user/balance` payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub balance: f64,
    pub account_number: String,
    pub username: String,
}

/// `POST /api/user/recharge` payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RechargeResponse {
    pub balance: f64,
    #[serde(default)]
    pub message: Option<String>,
}

/// A post-quantum signing key descriptor from `GET /api/user/keys`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningKey {
    pub id: i64,
    /// Lifecycle status, e.g. `"ACTIVE"`.
    pub status: String,
    /// Security level label, e.g. `"CAT-1 (128-bit)"`.
    #[serde(default)]
    pub security_level: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Serialized public key; can be tens of kilobytes.
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub usage_count: Option<i64>,
}

/// A wire transfer as tracked by the backend ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Ledger UUID string.
    pub transaction_id: String,
    /// e.g. `"WIRE_TRANSFER"`.
    pub transaction_type: String,
    #[serde(default)]
    pub from_account_number: Option<String>,
    pub to_account_number: String,
    pub beneficiary_name: String,
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub initiated_at: Option<String>,
    /// Lifecycle status: `PENDING`, `SIGNED`, `EXECUTED`, `REJECTED`, `FAILED`.
    pub status: String,
    /// AML risk score, 0..=100.
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub risk_score: Option<i64>,
    #[serde(default)]
    pub signature_verified: bool,
    #[serde(default)]
    pub executed_at: Option<String>,
}

/// `POST /api/transactions` request body.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub to_account_number: String,
    pub amount: f64,
    pub description: String,
    pub beneficiary_name: String,
    pub transaction_type: String,
    pub currency: String,
}

/// `POST /api/user/recharge` request body.
#[derive(Clone, Debug, Serialize)]
pub struct RechargeRequest {
    pub amount: f64,
}

/// `POST /api/user/change-password` request body.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Accept integers arriving as JSON floats with a zero fraction (the backend
/// serializes some counters through a decimal type).
fn deserialize_opt_i64_from_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(value) = value else { return Ok(None) };
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(int));
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(Some(float as i64));
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::Null => Ok(None),
        _ => Err(D::Error::custom("expected number")),
    }
}
