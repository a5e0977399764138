use super::*;
use crate::session::SessionStore;

#[test]
fn current_user_absent_without_stored_session() {
    let gateway = Gateway::new(SessionStore);
    assert!(current_user(&gateway).is_none());
}

#[test]
fn logout_is_idempotent() {
    let gateway = Gateway::new(SessionStore);
    logout(&gateway);
    logout(&gateway);
    assert!(current_user(&gateway).is_none());
}
