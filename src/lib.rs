//! # page-builder
//!
//! Leptos + WASM drag-and-drop page layout builder.
//!
//! Drag a text box, button, or image from the palette onto the canvas,
//! save the arrangement to `localStorage`, load it back, and publish it as
//! static HTML in a new window. The browser-independent model (palette,
//! layout, gestures, persistence, rendering) lives in the `layout` crate;
//! this crate owns the components and the web-sys glue.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: set up logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::mount_to_body(|| leptos::view! { <App/> });
}
