//! Palette of draggable controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each item captures the pointer on press and forwards move/up/cancel to
//! the builder's drag coordinator. The release point is tested against the
//! canvas bounds measured at release time; a hit appends the item's kind to
//! the layout, anything else is dropped silently.

use layout::control::{ControlKind, PALETTE};
use leptos::ev::PointerEvent;
use leptos::prelude::*;

use crate::state::BuilderHandle;
use crate::state::ui::UiState;
use crate::util::dom::{DropTarget, capture_pointer, client_point, starts_drag};

/// "Available Controls" panel listing every palette entry.
#[component]
pub fn ControlPalette() -> impl IntoView {
    let items = PALETTE
        .iter()
        .map(|descriptor| view! { <DraggableControl kind=descriptor.kind label=descriptor.label/> })
        .collect_view();

    view! {
        <div class="control-panel">
            <h3>"Available Controls"</h3>
            {items}
        </div>
    }
}

/// One palette entry that follows the pointer while dragged.
#[component]
fn DraggableControl(kind: ControlKind, label: &'static str) -> impl IntoView {
    let builder = expect_context::<BuilderHandle>();
    let ui = expect_context::<RwSignal<UiState>>();
    let target = expect_context::<DropTarget>();

    let on_pointer_down = move |ev: PointerEvent| {
        if !starts_drag(ev.button()) {
            return;
        }
        let at = client_point(&ev);
        if builder.with_mut(|b| b.begin_drag(kind, at)) != Some(true) {
            return;
        }
        capture_pointer(&ev);
        ui.update(|u| u.start_drag(kind));
    };

    let on_pointer_move = move |ev: PointerEvent| {
        if !ui.with_untracked(|u| u.is_dragging(kind)) {
            return;
        }
        let at = client_point(&ev);
        if let Some(offset) = builder.with_mut(|b| b.drag_to(at)).flatten() {
            ui.update(|u| u.move_drag(offset));
        }
    };

    let on_pointer_up = move |ev: PointerEvent| {
        if !ui.with_untracked(|u| u.is_dragging(kind)) {
            return;
        }
        let at = client_point(&ev);
        let bounds = target.bounds();
        let placed = builder
            .with_mut(|b| {
                if let Some(bounds) = bounds {
                    b.set_drop_target_bounds(bounds);
                }
                b.release_drag(at)
            })
            .flatten();
        if let Some(placed) = placed {
            leptos::logging::log!("placed {placed}");
        }
        ui.update(UiState::end_drag);
    };

    let on_pointer_cancel = move |_: PointerEvent| {
        builder.with_mut(|b| b.cancel_drag());
        ui.update(UiState::end_drag);
    };

    view! {
        <div
            class="draggable"
            class:draggable--active=move || ui.with(|u| u.is_dragging(kind))
            data-control=kind.id()
            style=move || ui.with(|u| u.item_style(kind))
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
        >
            {label}
        </div>
    }
}
