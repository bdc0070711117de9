//! Control kinds and the fixed palette of draggable controls.
//!
//! The palette is a static table built at compile time. Each entry is a drag
//! source whose drag identifier is its kind's [`ControlKind::id`].

#[cfg(test)]
#[path = "control_test.rs"]
mod control_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A control that can be placed on the canvas.
///
/// Serialized as its lowercase identifier (`"textbox"`, `"button"`,
/// `"image"`), which is also the persisted form inside a saved layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    /// A block of static text.
    Textbox,
    /// A clickable button.
    Button,
    /// An image with a placeholder source.
    Image,
}

impl ControlKind {
    /// Every kind, in palette order.
    pub const ALL: [Self; 3] = [Self::Textbox, Self::Button, Self::Image];

    /// Stable identifier used as the drag id and in persisted layouts.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Textbox => "textbox",
            Self::Button => "button",
            Self::Image => "image",
        }
    }

    /// Human-readable label shown in the palette.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Textbox => "Text Box",
            Self::Button => "Button",
            Self::Image => "Image",
        }
    }

    /// Look up a kind by its identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// The palette descriptor for this kind.
    #[must_use]
    pub fn descriptor(self) -> ControlDescriptor {
        ControlDescriptor { kind: self, label: self.label() }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown control identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown control kind: {0}")]
pub struct UnknownControlKind(pub String);

impl FromStr for ControlKind {
    type Err = UnknownControlKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| UnknownControlKind(s.to_owned()))
    }
}

/// One palette entry: which control it places and how it is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlDescriptor {
    pub kind: ControlKind,
    pub label: &'static str,
}

/// The fixed palette, in display order.
pub const PALETTE: [ControlDescriptor; 3] = [
    ControlDescriptor { kind: ControlKind::Textbox, label: ControlKind::Textbox.label() },
    ControlDescriptor { kind: ControlKind::Button, label: ControlKind::Button.label() },
    ControlDescriptor { kind: ControlKind::Image, label: ControlKind::Image.label() },
];
