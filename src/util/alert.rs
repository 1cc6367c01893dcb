//! Blocking browser dialogs.
//!
//! Native builds log instead of showing anything; `confirm` answers `false`
//! there so destructive actions never proceed without a user.

pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("alert: {message}");
    }
}

pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|window| window.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("confirm (auto-declined): {message}");
        false
    }
}
