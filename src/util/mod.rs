//! Browser glue behind the `layout` crate's seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module wraps one browser API so components never call web-sys
//! directly. Without the `csr` feature every helper degrades to a no-op or
//! an "unavailable" error, which keeps native tests deterministic.

pub mod alert;
pub mod browser_storage;
pub mod dom;
pub mod preview_window;
