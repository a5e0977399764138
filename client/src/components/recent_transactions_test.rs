use super::*;

#[test]
fn status_class_maps_lifecycle_states() {
    assert_eq!(status_class("SIGNED"), "status-badge status-badge--signed");
    assert_eq!(status_class("PENDING"), "status-badge status-badge--pending");
    assert_eq!(status_class("EXECUTED"), "status-badge status-badge--executed");
}

#[test]
fn status_class_treats_failed_like_rejected() {
    assert_eq!(status_class("REJECTED"), status_class("FAILED"));
}

#[test]
fn status_class_unknown_status_gets_base_class() {
    assert_eq!(status_class("ARCHIVED"), "status-badge");
}
