//! Canvas rendering of one placed control.

use layout::consts::{IMAGE_ALT, PLACEHOLDER_SRC};
use layout::control::ControlKind;
use leptos::prelude::*;

/// Live counterpart of the published fragment for `kind`.
#[component]
pub fn PlacedControl(kind: ControlKind) -> impl IntoView {
    match kind {
        ControlKind::Textbox => view! { <div>{kind.label()}</div> }.into_any(),
        ControlKind::Button => view! { <button>{kind.label()}</button> }.into_any(),
        ControlKind::Image => view! { <img src=PLACEHOLDER_SRC alt=IMAGE_ALT/> }.into_any(),
    }
}
