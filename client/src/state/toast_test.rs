use super::*;

#[test]
fn push_assigns_monotonic_ids() {
    let mut state = ToastState::default();
    let first = state.push_success("saved");
    let second = state.push_error("failed");
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push_success("one");
    let second = state.push_success("two");

    state.dismiss(first);

    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push_error("kept");
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.push_success("one");
    state.dismiss(first);
    let second = state.push_success("two");
    assert!(second > first);
}
