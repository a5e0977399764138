//! Account and transaction operations over the gateway.

#[cfg(test)]
#[path = "bank_test.rs"]
mod bank_test;

use super::error::ApiError;
use super::gateway::Gateway;
use super::types::{
    BalanceResponse, ChangePasswordRequest, CreateTransactionRequest, MessageResponse,
    RechargeRequest, RechargeResponse, SigningKey, Transaction,
};

fn sign_endpoint(id: &str, key_id: i64) -> String {
    format!("/api/transactions/{id}/sign?keyId={key_id}")
}

fn execute_endpoint(id: &str) -> String {
    format!("/api/transactions/{id}/execute")
}

fn verify_endpoint(id: &str) -> String {
    format!("/api/transactions/{id}/verify")
}

/// `GET /api/user/balance`.
pub async fn balance(gateway: &Gateway) -> Result<BalanceResponse, ApiError> {
    gateway.get_json("/api/user/balance").await
}

/// `POST /api/user/recharge`.
pub async fn recharge(gateway: &Gateway, amount: f64) -> Result<RechargeResponse, ApiError> {
    gateway.post_json("/api/user/recharge", &RechargeRequest { amount }).await
}

/// `POST /api/user/change-password`.
pub async fn change_password(
    gateway: &Gateway,
    old_password: &str,
    new_password: &str,
) -> Result<MessageResponse, ApiError> {
    let request = ChangePasswordRequest {
        old_password: old_password.to_owned(),
        new_password: new_password.to_owned(),
    };
    gateway.post_json("/api/user/change-password", &request).await
}

/// `GET /api/user/keys`: the account's signing-key inventory.
pub async fn keys(gateway: &Gateway) -> Result<Vec<SigningKey>, ApiError> {
    gateway.get_json("/api/user/keys").await
}

/// `GET /api/transactions`: the caller's transaction history.
pub async fn transactions(gateway: &Gateway) -> Result<Vec<Transaction>, ApiError> {
    gateway.get_json("/api/transactions").await
}

/// `POST /api/transactions`: create a pending transaction.
pub async fn create_transaction(
    gateway: &Gateway,
    request: &CreateTransactionRequest,
) -> Result<Transaction, ApiError> {
    gateway.post_json("/api/transactions", request).await
}

/// `POST /api/transactions/{id}/sign?keyId=`: sign with the selected key.
pub async fn sign_transaction(
    gateway: &Gateway,
    id: &str,
    key_id: i64,
) -> Result<Transaction, ApiError> {
    gateway.post_json_empty(&sign_endpoint(id, key_id)).await
}

/// `POST /api/transactions/{id}/execute`: move the funds.
pub async fn execute_transaction(gateway: &Gateway, id: &str) -> Result<Transaction, ApiError> {
    gateway.post_json_empty(&execute_endpoint(id)).await
}

/// `GET /api/transactions/{id}/verify`: backend signature check.
pub async fn verify_transaction(gateway: &Gateway, id: &str) -> Result<bool, ApiError> {
    gateway.get_json(&verify_endpoint(id)).await
}
