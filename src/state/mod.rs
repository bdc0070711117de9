//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The authoritative layout lives inside the [`Builder`], held in a
//! thread-local [`StoredValue`] because its observers are not `Send`.
//! Components render from signals: `RwSignal<Layout>` (fed by a builder
//! observer) and `RwSignal<UiState>` for drag feedback and notices.

pub mod ui;

use layout::builder::Builder;
use leptos::prelude::*;

use crate::util::browser_storage::BrowserStorage;

/// The page builder used by this app.
pub type PageBuilder = Builder<BrowserStorage>;

/// Copyable context handle to the app's [`PageBuilder`].
#[derive(Clone, Copy)]
pub struct BuilderHandle(StoredValue<PageBuilder, LocalStorage>);

impl BuilderHandle {
    pub fn new(builder: PageBuilder) -> Self {
        Self(StoredValue::new_local(builder))
    }

    /// Run `f` against the builder. `None` if the owning scope is gone.
    pub fn with_mut<R>(self, f: impl FnOnce(&mut PageBuilder) -> R) -> Option<R> {
        self.0.try_update_value(f)
    }
}
