//! Static HTML rendering of a layout and the seam for displaying it.
//!
//! [`render`] is pure and maps each placed control to a fixed fragment.
//! Showing the result is delegated to a [`PublishTarget`]; in the browser
//! that opens a new window and writes the markup as its whole document.

#[cfg(test)]
#[path = "publish_test.rs"]
mod publish_test;

use std::borrow::Cow;

use crate::consts::{IMAGE_ALT, PLACEHOLDER_SRC};
use crate::control::ControlKind;
use crate::state::Layout;

/// Error raised by a [`PublishTarget`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PublishError {
    /// No browsing surface could be opened (e.g. a popup blocker).
    #[error("preview window could not be opened")]
    SurfaceUnavailable,
    /// The surface opened but the document could not be written.
    #[error("failed to write preview document: {0}")]
    WriteFailed(String),
}

/// Markup for one placed control.
#[must_use]
pub fn fragment(kind: ControlKind) -> Cow<'static, str> {
    match kind {
        ControlKind::Textbox => Cow::Borrowed("<div>Text Box</div>"),
        ControlKind::Button => Cow::Borrowed("<button>Button</button>"),
        ControlKind::Image => Cow::Owned(format!(r#"<img src="{PLACEHOLDER_SRC}" alt="{IMAGE_ALT}" />"#)),
    }
}

/// Document body for `layout`: every fragment in order, no separators.
#[must_use]
pub fn render(layout: &Layout) -> String {
    layout.iter().map(fragment).collect()
}

/// Something that can display a rendered document.
pub trait PublishTarget {
    /// Open a fresh surface, write `html` as its complete document, and
    /// finish the document stream.
    ///
    /// # Errors
    ///
    /// Returns a [`PublishError`] if the surface cannot be opened or written.
    fn display(&mut self, html: &str) -> Result<(), PublishError>;
}

/// Render `layout` and hand the markup to `target`.
///
/// # Errors
///
/// Propagates the target's [`PublishError`].
pub fn publish(layout: &Layout, target: &mut impl PublishTarget) -> Result<(), PublishError> {
    let html = render(layout);
    target.display(&html)
}

/// Target that keeps every displayed document in memory.
///
/// Set `blocked` to simulate a surface that refuses to open.
#[derive(Debug, Clone, Default)]
pub struct MemoryTarget {
    pub documents: Vec<String>,
    pub blocked: bool,
}

impl MemoryTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn blocked() -> Self {
        Self { documents: Vec::new(), blocked: true }
    }

    /// Most recently displayed document.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.documents.last().map(String::as_str)
    }
}

impl PublishTarget for MemoryTarget {
    fn display(&mut self, html: &str) -> Result<(), PublishError> {
        if self.blocked {
            return Err(PublishError::SurfaceUnavailable);
        }
        self.documents.push(html.to_owned());
        Ok(())
    }
}
