//! Shared constants for the layout crate.

// ── Persistence ─────────────────────────────────────────────────

/// Local storage key the layout is saved under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "layout";

// ── Drag and drop ───────────────────────────────────────────────

/// Identifier of the canvas drop target.
pub const DEFAULT_DROP_TARGET_ID: &str = "droppable";

// ── Publishing ──────────────────────────────────────────────────

/// Image source used for every placed image control.
pub const PLACEHOLDER_SRC: &str = "placeholder.jpg";

/// Alt text used for every placed image control.
pub const IMAGE_ALT: &str = "Image";
