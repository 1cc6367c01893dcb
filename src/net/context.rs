//! Per-operation request context carrying a fresh CSRF token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every mutating backend call takes a `&RequestContext`. The only way to get
//! one is [`RequestContext::acquire`], which fetches a new token right before
//! the call and refuses to continue when the backend hands out nothing. An
//! empty token therefore never reaches the wire, and tokens are never cached
//! across operations.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::fmt;

use super::api::FirmaApi;
use crate::error::ApiError;

/// A non-empty anti-forgery token as issued by `GET /csrf-token`.
#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Wrap a raw token; blank input yields `None`.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() { None } else { Some(Self(raw)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CsrfToken(..)")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestContext {
    csrf: CsrfToken,
}

impl RequestContext {
    /// Fetch a fresh token and build a context for one mutating call.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingCsrfToken`] when the provider yields an
    /// empty token for any reason.
    pub async fn acquire<A: FirmaApi>(api: &A) -> Result<Self, ApiError> {
        let raw = api.fetch_csrf_token().await;
        match CsrfToken::new(raw) {
            Some(csrf) => Ok(Self { csrf }),
            None => {
                log::warn!("csrf token unavailable, aborting mutation");
                Err(ApiError::MissingCsrfToken)
            }
        }
    }

    /// Value for the `X-XSRF-TOKEN` header.
    pub fn csrf_token(&self) -> &str {
        self.csrf.as_str()
    }
}
