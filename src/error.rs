//! Error types shared by the REST layer and the page actions.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is handled where the user gesture started it: logged, then
//! surfaced as a blocking alert or inline text. Nothing is retried, and no
//! error is allowed to tear down the view.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const CSRF_UNAVAILABLE_MESSAGE: &str = "CSRF-Token konnte nicht geladen werden.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// No anti-forgery token could be obtained; the mutation was not sent.
    #[error("csrf token unavailable")]
    MissingCsrfToken,
    #[error("response decode failed: {0}")]
    Decode(String),
    /// The backend did not confirm the submitted credentials.
    #[error("credentials rejected")]
    Rejected,
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// User-facing alert text for this error.
    ///
    /// CSRF failures always get their own message, a backend `{ error }` body
    /// is shown verbatim, and everything else uses the operation's `fallback`.
    pub fn alert_text(&self, fallback: &str) -> String {
        match self {
            Self::MissingCsrfToken => CSRF_UNAVAILABLE_MESSAGE.to_owned(),
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}
