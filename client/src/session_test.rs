use super::*;

// =============================================================
// light_token: cookie-sized prefix of the full credential
// =============================================================

#[test]
fn light_token_takes_first_three_segments() {
    assert_eq!(light_token("abc.def.ghi.jkl"), "abc.def.ghi");
}

#[test]
fn light_token_exact_three_segments_unchanged() {
    assert_eq!(light_token("aaa.bbb.ccc"), "aaa.bbb.ccc");
}

#[test]
fn light_token_fewer_segments_pass_through() {
    assert_eq!(light_token("opaque"), "opaque");
    assert_eq!(light_token("head.tail"), "head.tail");
}

#[test]
fn light_token_is_prefix_of_full_token() {
    let full = "p1.p2.sig-part-one.sig-part-two.sig-part-three";
    let light = light_token(full);
    assert!(full.starts_with(&light));
}

#[test]
fn light_token_drops_oversized_signature_segment() {
    let signature = "s".repeat(12_000);
    let full = format!("header.claims.tail.{signature}");
    let light = light_token(&full);
    assert_eq!(light, "header.claims.tail");
    assert!(light.len() < 4096);
}

// =============================================================
// cookie assignments
// =============================================================

#[test]
fn token_cookie_value_carries_policy_attributes() {
    let cookie = token_cookie_value("abc.def.ghi");
    assert_eq!(cookie, "token=abc.def.ghi; Max-Age=604800; Path=/; SameSite=Lax");
}

#[test]
fn clear_cookie_value_expires_immediately() {
    let cookie = clear_cookie_value();
    assert!(cookie.starts_with("token=;"));
    assert!(cookie.contains("Max-Age=0"));
    assert!(cookie.contains("Path=/"));
}

// =============================================================
// SessionStore outside a browser context
// =============================================================

#[test]
fn token_absent_outside_browser() {
    // Without the hydrate feature every accessor reports absent.
    let store = SessionStore;
    assert!(store.token().is_none());
}

#[test]
fn user_absent_outside_browser() {
    let store = SessionStore;
    assert!(store.user().is_none());
}

#[test]
fn clear_is_idempotent() {
    let store = SessionStore;
    store.clear();
    store.clear();
    assert!(store.token().is_none());
    assert!(store.user().is_none());
}
