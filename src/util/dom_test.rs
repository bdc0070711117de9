use super::*;

// =============================================================
// starts_drag
// =============================================================

#[test]
fn primary_press_starts_drag() {
    assert!(starts_drag(PRIMARY_BUTTON));
}

#[test]
fn auxiliary_and_secondary_presses_do_not_start_drag() {
    // 1 = middle, 2 = right, 3/4 = back/forward.
    for button in 1..=4 {
        assert!(!starts_drag(button), "button {button} started a drag");
    }
}

