//! Core model for the drag-and-drop page layout builder.
//!
//! This crate holds everything that does not need a browser: the static
//! control palette, the ordered layout and its observers, the pointer
//! gesture coordinator, the key-value persistence adapter, and the HTML
//! publisher. The Leptos app in the workspace root wires DOM events and
//! browser APIs (local storage, `window.open`, `alert`) to these types.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`control`] | Control kinds and the fixed palette |
//! | [`state`] | [`state::Layout`] and the observable [`state::LayoutState`] |
//! | [`dnd`] | Drop target/drag source registry and the gesture state machine |
//! | [`store`] | Key-value storage trait, in-memory store, persistence adapter |
//! | [`publish`] | Pure layout-to-HTML rendering and the display seam |
//! | [`builder`] | [`builder::Builder`] facade and user-facing [`builder::Notice`]s |
//! | [`config`] | [`config::BuilderConfig`] |
//! | [`consts`] | Shared string constants (storage key, drop target id, etc.) |

pub mod builder;
pub mod config;
pub mod consts;
pub mod control;
pub mod dnd;
pub mod publish;
pub mod state;
pub mod store;
