//! Publish target that writes the rendered layout into a new window.
//!
//! TRADE-OFFS
//! ==========
//! `window.open()` returns `null` when a popup blocker intervenes. That case
//! is reported as [`PublishError::SurfaceUnavailable`] so the user gets a
//! notice instead of a script error.

#[cfg(test)]
#[path = "preview_window_test.rs"]
mod preview_window_test;

use layout::publish::{PublishError, PublishTarget};

/// Opens a fresh top-level browsing context per publish.
#[derive(Clone, Copy, Debug, Default)]
pub struct PreviewWindow;

impl PublishTarget for PreviewWindow {
    fn display(&mut self, html: &str) -> Result<(), PublishError> {
        #[cfg(feature = "csr")]
        {
            let window = web_sys::window().ok_or(PublishError::SurfaceUnavailable)?;
            let opened = window.open().map_err(|err| {
                log::warn!("window.open threw: {err:?}");
                PublishError::SurfaceUnavailable
            })?;
            let document = opened
                .and_then(|preview| preview.document())
                .ok_or(PublishError::SurfaceUnavailable)?;
            document
                .write_1(html)
                .map_err(|err| PublishError::WriteFailed(format!("{err:?}")))?;
            document
                .close()
                .map_err(|err| PublishError::WriteFailed(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = html;
            Err(PublishError::SurfaceUnavailable)
        }
    }
}
