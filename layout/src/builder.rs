//! The page builder: layout state, drag coordination, persistence, and
//! publishing behind one facade.
//!
//! SYSTEM CONTEXT
//! ==============
//! The view layer owns one [`Builder`] for the lifetime of the widget. It
//! forwards pointer gestures, the three action buttons, and the mount-time
//! initialize call, and it turns the returned [`Notice`]s into blocking
//! alerts. Every operation is synchronous and completes before the next
//! UI event is handled.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Storage and publish failures are logged and come
//! back as notices; a corrupt saved layout never replaces the current one.

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;

use crate::config::BuilderConfig;
use crate::control::ControlKind;
use crate::dnd::{DragCoordinator, DropEvent, Point, Rect};
use crate::publish::{self, PublishError, PublishTarget};
use crate::state::{Layout, LayoutState, SubscriptionId};
use crate::store::{KeyValueStore, PersistError, Persistence};

/// User-facing acknowledgment produced by a builder action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The layout was written to storage.
    Saved,
    /// Storage refused the write.
    SaveFailed,
    /// Load found nothing under the storage key.
    NotFound,
    /// The saved value could not be parsed; the layout was left unchanged.
    CorruptLayout,
    /// Storage could not be read at all.
    StorageUnavailable,
    /// The preview window could not be opened.
    PublishBlocked,
    /// The preview window opened but could not be written.
    PublishFailed,
}

impl Notice {
    /// Text shown to the user.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Saved => "Layout saved successfully!",
            Self::SaveFailed => "Layout could not be saved.",
            Self::NotFound => "No layout found!",
            Self::CorruptLayout => "Saved layout is unreadable and was ignored.",
            Self::StorageUnavailable => "Browser storage is not available.",
            Self::PublishBlocked => "Could not open a preview window. Allow pop-ups and try again.",
            Self::PublishFailed => "Could not write the preview document.",
        }
    }

    /// Whether the notice reports a failure rather than a success.
    #[must_use]
    pub fn is_error(self) -> bool {
        !matches!(self, Self::Saved)
    }
}

/// One page-builder instance.
#[derive(Debug)]
pub struct Builder<S> {
    state: LayoutState,
    dnd: DragCoordinator,
    persistence: Persistence<S>,
}

impl<S: KeyValueStore> Builder<S> {
    /// Create a builder with an empty layout and the full palette registered.
    ///
    /// Storage is not read until [`initialize`](Self::initialize).
    pub fn new(config: &BuilderConfig, store: S) -> Self {
        Self {
            state: LayoutState::new(),
            dnd: DragCoordinator::with_palette(config.drop_target_id.clone()),
            persistence: Persistence::new(store, config.storage_key.clone()),
        }
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        self.state.layout()
    }

    #[must_use]
    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Register a callback run after every layout mutation.
    pub fn subscribe(&mut self, observer: impl Fn(&Layout) + 'static) -> SubscriptionId {
        self.state.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    /// Hand the storage backend back, dropping the in-memory layout.
    pub fn into_store(self) -> S {
        self.persistence.into_store()
    }

    // --- Lifecycle ---

    /// Mount-time restore: replace the layout with the saved one if present.
    ///
    /// Absent storage leaves the layout empty with no notice. A corrupt or
    /// unreadable value also leaves it empty; the returned notice is a
    /// diagnostic the host may show non-blockingly.
    pub fn initialize(&mut self) -> Option<Notice> {
        match self.persistence.fetch() {
            Ok(Some(layout)) => {
                log::debug!("restored {} placed controls from {}", layout.len(), self.persistence.key());
                self.state.replace(layout);
                None
            }
            Ok(None) => None,
            Err(err) => Some(self.report_fetch_error("initialize", &err)),
        }
    }

    // --- Drag and drop ---

    /// Update where the canvas drop target sits on screen.
    pub fn set_drop_target_bounds(&mut self, bounds: Rect) {
        self.dnd.set_target_bounds(bounds);
    }

    /// Pointer down on a palette item.
    pub fn begin_drag(&mut self, source: ControlKind, at: Point) -> bool {
        self.dnd.begin(source, at)
    }

    /// Pointer move during a drag; returns the dragged item's translation.
    pub fn drag_to(&mut self, at: Point) -> Option<Point> {
        self.dnd.move_to(at)
    }

    /// Pointer up. Appends the dragged kind if released over the canvas and
    /// returns it; a release anywhere else changes nothing.
    pub fn release_drag(&mut self, at: Point) -> Option<ControlKind> {
        let event = self.dnd.release(at)?;
        self.handle_drop(event);
        Some(event.source)
    }

    /// Pointer cancel; the gesture is dropped without effect.
    pub fn cancel_drag(&mut self) {
        self.dnd.cancel();
    }

    /// Apply a drop: append the source's kind at the end of the layout.
    pub fn handle_drop(&mut self, event: DropEvent) {
        log::debug!("placed {} at position {}", event.source, self.state.layout().len());
        self.state.append(event.source);
    }

    // --- Actions ---

    /// Save the current layout, overwriting any previous save.
    pub fn save(&mut self) -> Notice {
        match self.persistence.save(self.state.layout()) {
            Ok(()) => Notice::Saved,
            Err(err) => {
                log::warn!("saving layout to {} failed: {err}", self.persistence.key());
                Notice::SaveFailed
            }
        }
    }

    /// Replace the layout with the saved one.
    ///
    /// Returns `None` on success. When nothing is saved, or the saved value
    /// is unusable, the layout is left as it was and a notice is returned.
    pub fn load(&mut self) -> Option<Notice> {
        match self.persistence.fetch() {
            Ok(Some(layout)) => {
                self.state.replace(layout);
                None
            }
            Ok(None) => Some(Notice::NotFound),
            Err(err) => Some(self.report_fetch_error("load", &err)),
        }
    }

    /// Render the layout and show it on `target`.
    ///
    /// Returns `None` on success, or the notice describing the failure.
    pub fn publish(&self, target: &mut impl PublishTarget) -> Option<Notice> {
        match publish::publish(self.state.layout(), target) {
            Ok(()) => None,
            Err(err) => {
                log::warn!("publish failed: {err}");
                Some(match err {
                    PublishError::SurfaceUnavailable => Notice::PublishBlocked,
                    PublishError::WriteFailed(_) => Notice::PublishFailed,
                })
            }
        }
    }

    fn report_fetch_error(&self, action: &str, err: &PersistError) -> Notice {
        log::warn!("{action}: reading {} failed: {err}", self.persistence.key());
        match err {
            PersistError::Layout(_) => Notice::CorruptLayout,
            PersistError::Store(_) => Notice::StorageUnavailable,
        }
    }
}
