//! Client-side form validation.
//!
//! These checks run before any network call; a failure blocks submission and
//! surfaces as an error toast. The backend re-validates everything; this is
//! feedback, not enforcement.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum accepted password length, matching the backend policy.
const MIN_PASSWORD_LEN: usize = 8;

/// Parse a user-entered amount: must be a finite number greater than zero.
pub fn parse_amount(raw: &str) -> Result<f64, String> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| "Please enter a valid amount.".to_owned())?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Please enter a valid amount.".to_owned());
    }
    Ok(amount)
}

/// Reject amounts exceeding the available balance.
///
/// An unknown balance (profile not yet refreshed) counts as zero, matching
/// the original front-end behavior.
pub fn check_funds(amount: f64, balance: Option<f64>) -> Result<(), String> {
    if amount > balance.unwrap_or(0.0) {
        return Err("Insufficient funds.".to_owned());
    }
    Ok(())
}

/// Validate a new password and its confirmation.
pub fn check_new_password(new_password: &str, confirm: &str) -> Result<(), String> {
    if new_password != confirm {
        return Err("New passwords do not match.".to_owned());
    }
    if new_password.len() < MIN_PASSWORD_LEN {
        return Err(format!("New password must be at least {MIN_PASSWORD_LEN} characters long."));
    }
    Ok(())
}

/// Validate the registration form fields.
pub fn check_signup(username: &str, email: &str, password: &str, confirm: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username is required.".to_owned());
    }
    if email.trim().is_empty() || !email.contains('@') {
        return Err("A valid email is required.".to_owned());
    }
    check_new_password(password, confirm)
}
