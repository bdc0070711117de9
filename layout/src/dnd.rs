//! Drag-and-drop coordination: one drop target, a set of drag sources, and
//! the gesture state machine that turns pointer events into drops.
//!
//! A gesture runs from [`DragCoordinator::begin`] (pointer down on a source)
//! through any number of [`DragCoordinator::move_to`] calls to a final
//! [`DragCoordinator::release`]. The release yields a [`DropEvent`] only
//! when the pointer is over the drop target's bounds; otherwise the gesture
//! is discarded without feedback.

#[cfg(test)]
#[path = "dnd_test.rs"]
mod dnd_test;

use crate::control::{ControlKind, PALETTE};

/// A point in client (viewport) coordinates, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - origin`.
    #[must_use]
    pub fn offset_from(self, origin: Point) -> Point {
        Point { x: self.x - origin.x, y: self.y - origin.y }
    }
}

/// Axis-aligned rectangle in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Whether `pt` lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.width && pt.y >= self.y && pt.y <= self.y + self.height
    }
}

/// A drag source released over the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropEvent {
    /// The dragged source; its identifier is the control kind's id.
    pub source: ControlKind,
}

/// Gesture state tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A source is being dragged.
    Dragging {
        source: ControlKind,
        /// Pointer position at pointer-down.
        origin: Point,
        /// Most recent pointer position.
        current: Point,
    },
}

/// Registry of the drop target and drag sources, plus the active gesture.
#[derive(Debug, Clone)]
pub struct DragCoordinator {
    target_id: String,
    target_bounds: Option<Rect>,
    sources: Vec<ControlKind>,
    state: DragState,
}

impl DragCoordinator {
    /// Create a coordinator with the given drop target id and no sources.
    #[must_use]
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            target_bounds: None,
            sources: Vec::new(),
            state: DragState::Idle,
        }
    }

    /// Create a coordinator with every palette entry registered as a source.
    #[must_use]
    pub fn with_palette(target_id: impl Into<String>) -> Self {
        let mut coordinator = Self::new(target_id);
        for descriptor in &PALETTE {
            coordinator.register_source(descriptor.kind);
        }
        coordinator
    }

    #[must_use]
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// Record where the drop target currently sits on screen.
    ///
    /// The host refreshes this before each release because the target can
    /// move with scrolling or as placed controls change its height.
    pub fn set_target_bounds(&mut self, bounds: Rect) {
        self.target_bounds = Some(bounds);
    }

    /// Register a drag source. Registering twice is a no-op.
    pub fn register_source(&mut self, source: ControlKind) {
        if !self.sources.contains(&source) {
            self.sources.push(source);
        }
    }

    #[must_use]
    pub fn sources(&self) -> &[ControlKind] {
        &self.sources
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// The source being dragged, if any.
    #[must_use]
    pub fn active(&self) -> Option<ControlKind> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { source, .. } => Some(source),
        }
    }

    /// Start a gesture on `source` at `at`.
    ///
    /// Returns `false` (and changes nothing) if the source is not registered.
    /// A new begin replaces any gesture still in progress.
    pub fn begin(&mut self, source: ControlKind, at: Point) -> bool {
        if !self.sources.contains(&source) {
            log::debug!("ignoring drag from unregistered source {source}");
            return false;
        }
        self.state = DragState::Dragging { source, origin: at, current: at };
        true
    }

    /// Move the active gesture to `at`, returning the dragged item's
    /// translation from its origin. `None` when idle.
    pub fn move_to(&mut self, at: Point) -> Option<Point> {
        match &mut self.state {
            DragState::Idle => None,
            DragState::Dragging { origin, current, .. } => {
                *current = at;
                Some(at.offset_from(*origin))
            }
        }
    }

    /// Translation of `source` from its origin while it is being dragged.
    #[must_use]
    pub fn translation(&self, source: ControlKind) -> Option<Point> {
        match self.state {
            DragState::Dragging { source: active, origin, current } if active == source => {
                Some(current.offset_from(origin))
            }
            _ => None,
        }
    }

    /// End the gesture at `at`.
    ///
    /// Yields a [`DropEvent`] only if a gesture was active and `at` is inside
    /// the drop target's bounds. The coordinator is idle afterwards either way.
    pub fn release(&mut self, at: Point) -> Option<DropEvent> {
        let state = std::mem::take(&mut self.state);
        let DragState::Dragging { source, .. } = state else {
            return None;
        };
        let over = self.target_bounds.is_some_and(|bounds| bounds.contains(at));
        if !over {
            log::debug!("drag of {source} released outside {}", self.target_id);
            return None;
        }
        Some(DropEvent { source })
    }

    /// Abandon the active gesture without a drop.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

/// CSS transform for a dragged item translated by `delta`.
#[must_use]
pub fn transform_css(delta: Point) -> String {
    format!("translate3d({}px, {}px, 0)", delta.x, delta.y)
}
