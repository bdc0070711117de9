//! The canvas: drop target for palette items and live view of the layout.

use layout::config::BuilderConfig;
use layout::state::Layout;
use leptos::prelude::*;

use crate::components::action_bar::ActionBar;
use crate::components::placed_control::PlacedControl;
use crate::state::ui::UiState;
use crate::util::dom::DropTarget;

/// Drop area rendering every placed control in layout order, followed by
/// the Save/Load/Publish buttons.
#[component]
pub fn DroppableArea() -> impl IntoView {
    let config = expect_context::<BuilderConfig>();
    let layout = expect_context::<RwSignal<Layout>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let target = expect_context::<DropTarget>();

    let placed = move || {
        layout.with(|l| {
            l.iter()
                .map(|kind| view! { <div class="droppable-area__entry"><PlacedControl kind=kind/></div> })
                .collect_view()
        })
    };

    view! {
        <div
            node_ref=target.node_ref()
            id=config.drop_target_id
            class="droppable-area"
            class:droppable-area--armed=move || ui.with(|u| u.drag.is_some())
        >
            <h3>"Dynamic Page Layout"</h3>
            {placed}
            <ActionBar/>
        </div>
    }
}
