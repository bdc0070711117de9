//! Save / Load / Publish buttons and the status line under them.

use layout::builder::Notice;
use leptos::prelude::*;

use crate::state::BuilderHandle;
use crate::state::ui::UiState;
use crate::util::alert;
use crate::util::preview_window::PreviewWindow;

/// Action buttons for the current layout.
///
/// Save always acknowledges; Load only speaks up when nothing usable is
/// stored; Publish only when the preview window cannot be opened.
#[component]
pub fn ActionBar() -> impl IntoView {
    let builder = expect_context::<BuilderHandle>();
    let ui = expect_context::<RwSignal<UiState>>();

    let report = move |notice: Option<Notice>| {
        ui.update(|u| u.status = notice);
        if let Some(notice) = notice {
            alert::show(notice);
        }
    };

    let on_save = move |_| {
        report(builder.with_mut(|b| b.save()));
    };

    let on_load = move |_| {
        report(builder.with_mut(|b| b.load()).flatten());
    };

    let on_publish = move |_| {
        let mut window = PreviewWindow;
        report(builder.with_mut(|b| b.publish(&mut window)).flatten());
    };

    let status = move || ui.with(|u| u.status.map(|n| (n.is_error(), n.message())));

    view! {
        <div class="action-buttons">
            <button on:click=on_save>"Save Layout"</button>
            <button on:click=on_load>"Load Layout"</button>
            <button on:click=on_publish>"Publish"</button>
        </div>
        {move || {
            status()
                .map(|(is_error, message)| {
                    view! {
                        <p class="action-status" class:action-status--error=is_error>
                            {message}
                        </p>
                    }
                })
        }}
    }
}
