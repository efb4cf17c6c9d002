use super::*;

// =============================================================
// Single-flight invariant
// =============================================================

#[test]
fn new_trigger_is_idle() {
    assert!(!LoginTrigger::new().in_flight());
}

#[test]
fn try_begin_claims_the_slot_once() {
    let trigger = LoginTrigger::new();
    assert!(trigger.try_begin());
    assert!(trigger.in_flight());
    assert!(!trigger.try_begin());
}

#[test]
fn clear_releases_the_slot() {
    let trigger = LoginTrigger::new();
    assert!(trigger.try_begin());
    trigger.clear();
    assert!(!trigger.in_flight());
    assert!(trigger.try_begin());
}

#[test]
fn clear_is_idempotent() {
    let trigger = LoginTrigger::new();
    trigger.clear();
    assert!(!trigger.in_flight());
}

// =============================================================
// Shared handles
// =============================================================

#[test]
fn clones_share_one_flag() {
    let trigger = LoginTrigger::new();
    let handle = trigger.clone();

    assert!(trigger.try_begin());
    assert!(handle.in_flight());
    assert!(!handle.try_begin());

    handle.clear();
    assert!(!trigger.in_flight());
}
