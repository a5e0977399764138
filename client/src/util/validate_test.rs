use super::*;

// =============================================================
// parse_amount
// =============================================================

#[test]
fn parse_amount_accepts_decimal_input() {
    assert_eq!(parse_amount("250.50"), Ok(250.5));
}

#[test]
fn parse_amount_trims_whitespace() {
    assert_eq!(parse_amount("  42 "), Ok(42.0));
}

#[test]
fn parse_amount_rejects_non_numeric() {
    assert!(parse_amount("ten euros").is_err());
    assert!(parse_amount("").is_err());
}

#[test]
fn parse_amount_rejects_zero_and_negative() {
    assert!(parse_amount("0").is_err());
    assert!(parse_amount("-5").is_err());
}

#[test]
fn parse_amount_rejects_infinities() {
    assert!(parse_amount("inf").is_err());
    assert!(parse_amount("NaN").is_err());
}

// =============================================================
// check_funds
// =============================================================

#[test]
fn check_funds_allows_amount_within_balance() {
    assert!(check_funds(100.0, Some(250.0)).is_ok());
    assert!(check_funds(250.0, Some(250.0)).is_ok());
}

#[test]
fn check_funds_rejects_overdraft() {
    assert!(check_funds(250.01, Some(250.0)).is_err());
}

#[test]
fn check_funds_treats_unknown_balance_as_zero() {
    assert!(check_funds(1.0, None).is_err());
}

// =============================================================
// password checks
// =============================================================

#[test]
fn check_new_password_accepts_matching_long_password() {
    assert!(check_new_password("correct-horse", "correct-horse").is_ok());
}

#[test]
fn check_new_password_rejects_mismatch() {
    let err = check_new_password("correct-horse", "correct-h0rse").unwrap_err();
    assert_eq!(err, "New passwords do not match.");
}

#[test]
fn check_new_password_rejects_short_password() {
    assert!(check_new_password("short", "short").is_err());
}

// =============================================================
// check_signup
// =============================================================

#[test]
fn check_signup_accepts_complete_form() {
    assert!(check_signup("alice", "alice@talachi.example", "long-enough", "long-enough").is_ok());
}

#[test]
fn check_signup_rejects_blank_username() {
    assert!(check_signup("  ", "a@b.c", "long-enough", "long-enough").is_err());
}

#[test]
fn check_signup_rejects_invalid_email() {
    assert!(check_signup("alice", "not-an-email", "long-enough", "long-enough").is_err());
}
