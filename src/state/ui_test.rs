use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_not_dragging() {
    let state = UiState::default();
    assert!(state.drag.is_none());
    assert!(!state.is_dragging(ControlKind::Button));
}

#[test]
fn ui_state_default_has_no_status() {
    assert!(UiState::default().status.is_none());
}

// =============================================================
// Drag feedback
// =============================================================

#[test]
fn start_drag_marks_only_that_kind() {
    let mut state = UiState::default();
    state.start_drag(ControlKind::Image);
    assert!(state.is_dragging(ControlKind::Image));
    assert!(!state.is_dragging(ControlKind::Textbox));
}

#[test]
fn move_drag_updates_offset() {
    let mut state = UiState::default();
    state.start_drag(ControlKind::Button);
    state.move_drag(Point::new(12.0, -4.0));
    assert_eq!(state.drag.map(|d| d.offset), Some(Point::new(12.0, -4.0)));
}

#[test]
fn move_drag_when_idle_is_ignored() {
    let mut state = UiState::default();
    state.move_drag(Point::new(1.0, 1.0));
    assert!(state.drag.is_none());
}

#[test]
fn end_drag_clears_feedback() {
    let mut state = UiState::default();
    state.start_drag(ControlKind::Button);
    state.end_drag();
    assert!(state.drag.is_none());
}

#[test]
fn item_style_translates_dragged_item() {
    let mut state = UiState::default();
    state.start_drag(ControlKind::Textbox);
    state.move_drag(Point::new(30.0, 15.5));
    assert_eq!(
        state.item_style(ControlKind::Textbox),
        "touch-action: none; transform: translate3d(30px, 15.5px, 0);"
    );
}

#[test]
fn item_style_leaves_other_items_in_place() {
    let mut state = UiState::default();
    state.start_drag(ControlKind::Textbox);
    state.move_drag(Point::new(30.0, 15.5));
    assert_eq!(state.item_style(ControlKind::Image), "touch-action: none;");
}
