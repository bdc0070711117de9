#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use layout::builder::Notice;
use layout::control::ControlKind;
use layout::dnd::{Point, transform_css};

/// View-side state: drag feedback for the palette and the last notice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    /// Palette item currently following the pointer.
    pub drag: Option<DragView>,
    /// Most recent acknowledgment or diagnostic, shown under the buttons.
    pub status: Option<Notice>,
}

/// A palette item being dragged and how far it has moved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragView {
    pub kind: ControlKind,
    pub offset: Point,
}

impl UiState {
    pub fn start_drag(&mut self, kind: ControlKind) {
        self.drag = Some(DragView { kind, offset: Point::default() });
    }

    pub fn move_drag(&mut self, offset: Point) {
        if let Some(drag) = &mut self.drag {
            drag.offset = offset;
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    #[must_use]
    pub fn is_dragging(&self, kind: ControlKind) -> bool {
        self.drag.is_some_and(|d| d.kind == kind)
    }

    /// Inline style for a palette item; the dragged one follows the pointer.
    #[must_use]
    pub fn item_style(&self, kind: ControlKind) -> String {
        match self.drag {
            Some(drag) if drag.kind == kind => {
                format!("touch-action: none; transform: {};", transform_css(drag.offset))
            }
            _ => "touch-action: none;".to_owned(),
        }
    }
}
