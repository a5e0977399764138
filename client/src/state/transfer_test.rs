use super::*;

#[test]
fn wizard_starts_on_form() {
    assert_eq!(TransferStep::default(), TransferStep::Form);
    assert_eq!(TransferStep::Form.progress(), 0);
}

#[test]
fn progress_is_monotonic_along_the_happy_path() {
    let path = [
        TransferStep::Form,
        TransferStep::Sign,
        TransferStep::Hashing,
        TransferStep::Signing,
        TransferStep::Executing,
        TransferStep::Complete,
    ];
    for pair in path.windows(2) {
        assert!(pair[0].progress() < pair[1].progress(), "{:?} -> {:?}", pair[0], pair[1]);
    }
    assert_eq!(TransferStep::Complete.progress(), 100);
}

#[test]
fn only_in_flight_steps_are_busy() {
    assert!(TransferStep::Hashing.is_busy());
    assert!(TransferStep::Signing.is_busy());
    assert!(TransferStep::Executing.is_busy());
    assert!(!TransferStep::Form.is_busy());
    assert!(!TransferStep::Sign.is_busy());
    assert!(!TransferStep::Complete.is_busy());
}

#[test]
fn failure_regresses_busy_steps_to_sign() {
    assert_eq!(TransferStep::Signing.on_failure(), TransferStep::Sign);
    assert_eq!(TransferStep::Executing.on_failure(), TransferStep::Sign);
    assert_eq!(TransferStep::Hashing.on_failure(), TransferStep::Sign);
}

#[test]
fn failure_on_idle_steps_stays_put() {
    assert_eq!(TransferStep::Form.on_failure(), TransferStep::Form);
    assert_eq!(TransferStep::Complete.on_failure(), TransferStep::Complete);
}
