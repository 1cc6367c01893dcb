//! Registration submit: validate locally, then `POST` with a fresh token.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::error::ApiError;
use crate::net::api::FirmaApi;
use crate::net::context::RequestContext;
use crate::net::types::NewFirma;
use crate::state::registration::RegistrationForm;

pub const REGISTERED_MESSAGE: &str = "Firma erfolgreich registriert!";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Fehler bei der Registrierung.";
pub const REGISTRATION_NETWORK_MESSAGE: &str = "Es gab einen Fehler bei der Registrierung.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// Local validation failed; nothing was sent.
    #[error("validation failed: {0:?}")]
    Invalid(Vec<String>),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl RegistrationError {
    /// Alert text for failures after validation passed.
    pub fn alert_text(&self) -> Option<String> {
        match self {
            Self::Invalid(_) => None,
            Self::Api(ApiError::Network(_)) => Some(REGISTRATION_NETWORK_MESSAGE.to_owned()),
            Self::Api(err) => Some(err.alert_text(REGISTRATION_FAILED_MESSAGE)),
        }
    }
}

/// Validate and submit the registration.
///
/// # Errors
///
/// [`RegistrationError::Invalid`] with every validation message before any
/// network call, otherwise [`RegistrationError::Api`].
pub async fn submit<A: FirmaApi>(api: &A, form: &RegistrationForm) -> Result<NewFirma, RegistrationError> {
    let submission = form.validate().map_err(RegistrationError::Invalid)?;
    let ctx = RequestContext::acquire(api).await?;
    api.register_firma(&ctx, &submission)
        .await
        .inspect_err(|e| log::error!("registration failed: {e}"))?;
    log::info!("company registered");
    Ok(submission)
}
