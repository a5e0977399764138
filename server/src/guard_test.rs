use super::*;

// =============================================================================
// Protected sections without a cookie
// =============================================================================

#[test]
fn dashboard_without_token_redirects_to_login_with_callback() {
    assert_eq!(
        decide("/dashboard", false),
        GuardDecision::Redirect("/login?callbackUrl=/dashboard".to_owned())
    );
}

#[test]
fn every_protected_prefix_redirects_without_token() {
    for path in [
        "/dashboard",
        "/transactions",
        "/sign-transaction",
        "/verify-transaction",
        "/settings",
        "/account",
    ] {
        match decide(path, false) {
            GuardDecision::Redirect(target) => {
                assert_eq!(target, format!("/login?callbackUrl={path}"));
            }
            GuardDecision::Allow => panic!("{path} should not be reachable without a token"),
        }
    }
}

#[test]
fn nested_protected_paths_redirect_with_full_callback() {
    assert_eq!(
        decide("/settings/security", false),
        GuardDecision::Redirect("/login?callbackUrl=/settings/security".to_owned())
    );
    assert_eq!(
        decide("/account/recharge", false),
        GuardDecision::Redirect("/login?callbackUrl=/account/recharge".to_owned())
    );
}

#[test]
fn dashboard_with_token_passes_through() {
    assert_eq!(decide("/dashboard", true), GuardDecision::Allow);
}

// =============================================================================
// Auth pages with a cookie
// =============================================================================

#[test]
fn login_with_token_redirects_to_dashboard() {
    assert_eq!(decide("/login", true), GuardDecision::Redirect("/dashboard".to_owned()));
}

#[test]
fn register_with_token_redirects_to_dashboard() {
    assert_eq!(decide("/register", true), GuardDecision::Redirect("/dashboard".to_owned()));
}

#[test]
fn login_without_token_passes_through() {
    assert_eq!(decide("/login", false), GuardDecision::Allow);
}

#[test]
fn auth_page_match_is_exact_not_prefix() {
    // Only the exact pages bounce authenticated users.
    assert_eq!(decide("/login/help", true), GuardDecision::Allow);
}

// =============================================================================
// Everything else
// =============================================================================

#[test]
fn public_paths_always_pass_through() {
    for has_token in [false, true] {
        assert_eq!(decide("/", has_token), GuardDecision::Allow);
        assert_eq!(decide("/healthz", has_token), GuardDecision::Allow);
        assert_eq!(decide("/pkg/talachi-bank.css", has_token), GuardDecision::Allow);
    }
}

#[test]
fn guard_never_contacts_anything() {
    // The decision is a pure function of path and cookie presence; calling it
    // twice with the same inputs always agrees.
    assert_eq!(decide("/transactions", false), decide("/transactions", false));
}
