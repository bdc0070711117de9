//! Blocking acknowledgments via `window.alert`.

use layout::builder::Notice;

/// Show `notice` to the user and wait for dismissal.
///
/// Outside the browser the message is logged instead.
pub fn show(notice: Notice) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(notice.message()) {
            leptos::logging::warn!("alert failed for {notice:?}: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        leptos::logging::log!("{}", notice.message());
    }
}
