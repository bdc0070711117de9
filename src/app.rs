//! Root application component and context providers.

use layout::builder::Builder;
use layout::config::BuilderConfig;
use layout::state::Layout;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::drop_area::DroppableArea;
use crate::components::palette::ControlPalette;
use crate::state::BuilderHandle;
use crate::state::ui::UiState;
use crate::util::browser_storage::BrowserStorage;
use crate::util::dom::DropTarget;

/// Root application component.
///
/// Creates the builder, mirrors its layout into a signal through an
/// observer, restores any saved layout, and provides the shared contexts
/// used by the palette, canvas, and action buttons.
#[component]
pub fn App(#[prop(optional)] config: Option<BuilderConfig>) -> impl IntoView {
    provide_meta_context();
    let config = config.unwrap_or_default();

    let layout = RwSignal::new(Layout::default());
    let ui = RwSignal::new(UiState::default());

    let mut builder = Builder::new(&config, BrowserStorage::new());
    builder.subscribe(move |current| layout.set(current.clone()));

    // Restore on mount. A bad saved value leaves the canvas empty.
    if let Some(notice) = builder.initialize() {
        leptos::logging::warn!("restoring saved layout: {}", notice.message());
        ui.update(|u| u.status = Some(notice));
    }

    provide_context(config);
    provide_context(layout);
    provide_context(ui);
    provide_context(BuilderHandle::new(builder));
    provide_context(DropTarget::new());

    view! {
        <Title text="Page Builder"/>
        <div class="layout-container">
            <ControlPalette/>
            <DroppableArea/>
        </div>
    }
}
