//! Layout model and its observable container.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Layout`] is the user's page design: the controls placed on the canvas
//! in placement order. [`LayoutState`] owns the current layout and notifies
//! subscribed observers after every mutation, which is how the view layer
//! learns it has to re-render the canvas.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::control::ControlKind;

/// Error raised while converting a layout to or from its persisted text.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The stored text is not a JSON array of known control identifiers.
    #[error("stored layout is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
    /// The layout could not be serialized.
    #[error("failed to serialize layout: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Ordered sequence of placed controls.
///
/// Insertion order is placement order and render order. The same kind may
/// appear any number of times. Persisted as a plain JSON array of
/// identifiers, e.g. `["textbox","image"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    entries: Vec<ControlKind>,
}

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The placed controls, in order.
    #[must_use]
    pub fn entries(&self) -> &[ControlKind] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a control after every existing entry.
    pub fn push(&mut self, kind: ControlKind) {
        self.entries.push(kind);
    }

    pub fn iter(&self) -> impl Iterator<Item = ControlKind> + '_ {
        self.entries.iter().copied()
    }

    /// Serialize to the persisted text form.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Serialize`] if `serde_json` fails.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        serde_json::to_string(self).map_err(LayoutError::Serialize)
    }

    /// Parse the persisted text form. Either the whole value parses or
    /// nothing is produced.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Corrupt`] for malformed JSON, a non-array
    /// value, or any unknown control identifier.
    pub fn from_json(raw: &str) -> Result<Self, LayoutError> {
        serde_json::from_str(raw).map_err(LayoutError::Corrupt)
    }
}

impl From<Vec<ControlKind>> for Layout {
    fn from(entries: Vec<ControlKind>) -> Self {
        Self { entries }
    }
}

impl FromIterator<ControlKind> for Layout {
    fn from_iter<I: IntoIterator<Item = ControlKind>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = ControlKind;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, ControlKind>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().copied()
    }
}

/// Handle returned by [`LayoutState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&Layout)>;

/// Current layout plus the observers interested in its changes.
///
/// The only mutations are [`append`](Self::append) (a successful drop) and
/// [`replace`](Self::replace) (initialize/load). Each one notifies every
/// observer exactly once, in subscription order, with the new layout.
#[derive(Default)]
pub struct LayoutState {
    layout: Layout,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl LayoutState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Register a callback run after every mutation.
    pub fn subscribe(&mut self, observer: impl Fn(&Layout) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Append one control at the end of the layout.
    pub fn append(&mut self, kind: ControlKind) {
        self.layout.push(kind);
        self.notify();
    }

    /// Overwrite the whole layout.
    pub fn replace(&mut self, layout: Layout) {
        self.layout = layout;
        self.notify();
    }

    fn notify(&self) {
        for (_, observer) in &self.observers {
            observer(&self.layout);
        }
    }
}

impl fmt::Debug for LayoutState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutState")
            .field("layout", &self.layout)
            .field("observers", &self.observers.len())
            .finish()
    }
}
