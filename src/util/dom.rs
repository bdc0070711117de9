//! Pointer and element geometry helpers for the drag-and-drop wiring.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use layout::dnd::{Point, Rect};
use leptos::ev::PointerEvent;
use leptos::html::Div;
use leptos::prelude::*;

/// `PointerEvent.button` value of the primary button, pen contact or touch.
pub const PRIMARY_BUTTON: i16 = 0;

/// Whether a press with `button` may start a drag. Secondary and auxiliary
/// buttons never do.
pub fn starts_drag(button: i16) -> bool {
    button == PRIMARY_BUTTON
}

/// Pointer position in client coordinates.
pub fn client_point(ev: &PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Route the rest of this pointer's events to the element that received
/// `ev`, so the release is seen even when it happens over the canvas.
pub fn capture_pointer(ev: &PointerEvent) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(element) = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        if let Err(err) = element.set_pointer_capture(ev.pointer_id()) {
            leptos::logging::warn!("pointer capture failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
    }
}

/// Context handle for the canvas element that accepts drops.
#[derive(Clone, Copy)]
pub struct DropTarget(NodeRef<Div>);

impl DropTarget {
    pub fn new() -> Self {
        Self(NodeRef::new())
    }

    /// Node ref to attach to the canvas element.
    pub fn node_ref(self) -> NodeRef<Div> {
        self.0
    }

    /// Current on-screen bounds of the canvas, if it is mounted.
    pub fn bounds(self) -> Option<Rect> {
        #[cfg(feature = "csr")]
        {
            let element = self.0.get_untracked()?;
            let rect = element.get_bounding_client_rect();
            Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }
}

impl Default for DropTarget {
    fn default() -> Self {
        Self::new()
    }
}
