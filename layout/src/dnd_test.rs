use super::*;
use crate::control::ControlKind::{Button, Image, Textbox};

fn canvas() -> DragCoordinator {
    let mut dnd = DragCoordinator::with_palette("droppable");
    dnd.set_target_bounds(Rect::new(200.0, 0.0, 400.0, 300.0));
    dnd
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn rect_contains_interior_and_edges() {
    let r = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert!(r.contains(Point::new(50.0, 40.0)));
    assert!(r.contains(Point::new(10.0, 20.0)));
    assert!(r.contains(Point::new(110.0, 70.0)));
}

#[test]
fn rect_excludes_outside_points() {
    let r = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert!(!r.contains(Point::new(9.9, 40.0)));
    assert!(!r.contains(Point::new(50.0, 70.1)));
    assert!(!r.contains(Point::new(-50.0, -50.0)));
}

#[test]
fn point_offset_from_subtracts_componentwise() {
    let d = Point::new(15.0, 5.0).offset_from(Point::new(10.0, 10.0));
    assert_eq!(d, Point::new(5.0, -5.0));
}

// =============================================================
// Registration
// =============================================================

#[test]
fn with_palette_registers_all_three_sources() {
    let dnd = DragCoordinator::with_palette("droppable");
    assert_eq!(dnd.sources(), &[Textbox, Button, Image]);
    assert_eq!(dnd.target_id(), "droppable");
}

#[test]
fn register_source_is_idempotent() {
    let mut dnd = DragCoordinator::new("droppable");
    dnd.register_source(Button);
    dnd.register_source(Button);
    assert_eq!(dnd.sources(), &[Button]);
}

#[test]
fn begin_rejects_unregistered_source() {
    let mut dnd = DragCoordinator::new("droppable");
    dnd.register_source(Textbox);
    assert!(!dnd.begin(Image, Point::new(0.0, 0.0)));
    assert_eq!(dnd.state(), DragState::Idle);
}

// =============================================================
// Gestures
// =============================================================

#[test]
fn release_over_target_emits_one_drop() {
    let mut dnd = canvas();
    assert!(dnd.begin(Button, Point::new(20.0, 20.0)));
    dnd.move_to(Point::new(250.0, 100.0));
    assert_eq!(dnd.release(Point::new(300.0, 120.0)), Some(DropEvent { source: Button }));
    assert_eq!(dnd.state(), DragState::Idle);
}

#[test]
fn release_outside_target_emits_nothing() {
    let mut dnd = canvas();
    dnd.begin(Textbox, Point::new(20.0, 20.0));
    assert_eq!(dnd.release(Point::new(50.0, 50.0)), None);
    assert_eq!(dnd.state(), DragState::Idle);
}

#[test]
fn release_without_gesture_emits_nothing() {
    let mut dnd = canvas();
    assert_eq!(dnd.release(Point::new(300.0, 120.0)), None);
}

#[test]
fn release_without_target_bounds_emits_nothing() {
    let mut dnd = DragCoordinator::with_palette("droppable");
    dnd.begin(Image, Point::new(0.0, 0.0));
    assert_eq!(dnd.release(Point::new(300.0, 120.0)), None);
}

#[test]
fn second_release_after_drop_is_ignored() {
    let mut dnd = canvas();
    dnd.begin(Image, Point::new(0.0, 0.0));
    assert!(dnd.release(Point::new(300.0, 100.0)).is_some());
    assert!(dnd.release(Point::new(300.0, 100.0)).is_none());
}

#[test]
fn cancel_discards_gesture() {
    let mut dnd = canvas();
    dnd.begin(Image, Point::new(0.0, 0.0));
    dnd.cancel();
    assert_eq!(dnd.active(), None);
    assert_eq!(dnd.release(Point::new(300.0, 100.0)), None);
}

#[test]
fn begin_replaces_gesture_in_progress() {
    let mut dnd = canvas();
    dnd.begin(Image, Point::new(0.0, 0.0));
    dnd.begin(Textbox, Point::new(5.0, 5.0));
    assert_eq!(dnd.active(), Some(Textbox));
}

// =============================================================
// Translation
// =============================================================

#[test]
fn move_to_reports_translation_from_origin() {
    let mut dnd = canvas();
    dnd.begin(Button, Point::new(10.0, 10.0));
    assert_eq!(dnd.move_to(Point::new(40.0, 5.0)), Some(Point::new(30.0, -5.0)));
    assert_eq!(dnd.translation(Button), Some(Point::new(30.0, -5.0)));
}

#[test]
fn translation_only_for_active_source() {
    let mut dnd = canvas();
    dnd.begin(Button, Point::new(10.0, 10.0));
    dnd.move_to(Point::new(40.0, 5.0));
    assert_eq!(dnd.translation(Image), None);
}

#[test]
fn move_to_when_idle_is_none() {
    let mut dnd = canvas();
    assert_eq!(dnd.move_to(Point::new(1.0, 1.0)), None);
}

#[test]
fn transform_css_formats_translate3d() {
    assert_eq!(transform_css(Point::new(12.0, -3.5)), "translate3d(12px, -3.5px, 0)");
}
