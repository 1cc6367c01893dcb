//! Public list actions: fetching and the password gate in front of editing.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::error::{ApiError, CSRF_UNAVAILABLE_MESSAGE};
use crate::net::api::FirmaApi;
use crate::net::context::RequestContext;
use crate::net::types::{Firma, PasswordCheckRequest};
use crate::util::sanitize::sanitize_trimmed;
use crate::util::validate::is_valid_password;

/// Fetch every record for the public list.
///
/// # Errors
///
/// Returns the transport or status error; callers keep their previous list.
pub async fn load_firmen<A: FirmaApi>(api: &A) -> Result<Vec<Firma>, ApiError> {
    api.list_firmen().await.inspect_err(|e| log::error!("fetching companies failed: {e}"))
}

/// Why the edit gate stayed closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDenial {
    MissingPassword,
    TooShort,
    CsrfUnavailable,
    /// Wrong password, unknown record, or transport failure alike.
    WrongPassword,
}

impl GateDenial {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingPassword => "Bitte Passwort eingeben.",
            Self::TooShort => "Das Passwort muss mindestens 5 Zeichen lang sein.",
            Self::CsrfUnavailable => CSRF_UNAVAILABLE_MESSAGE,
            Self::WrongPassword => "Falsches Passwort.",
        }
    }
}

/// Permission to open the edit view for one record. Only
/// [`unlock_edit`] creates it.
#[derive(Clone, Debug, PartialEq)]
pub struct EditGrant {
    firma: Firma,
}

impl EditGrant {
    pub fn firma(&self) -> &Firma {
        &self.firma
    }

    pub fn into_firma(self) -> Firma {
        self.firma
    }

    /// Route of the edit view for the granted record.
    pub fn path(&self) -> String {
        format!("/edit-firma/{}", self.firma.id)
    }
}

/// Check the record password with the backend.
///
/// The password is sanitized and rejected locally below the minimum length.
/// Only an explicit `valid: true` grants access; every other outcome reads as
/// a wrong password so record existence is never revealed.
///
/// # Errors
///
/// Returns the [`GateDenial`] to show the user.
pub async fn unlock_edit<A: FirmaApi>(api: &A, firma: &Firma, raw_password: &str) -> Result<EditGrant, GateDenial> {
    let password = sanitize_trimmed(raw_password);
    if password.is_empty() {
        return Err(GateDenial::MissingPassword);
    }
    if !is_valid_password(&password) {
        return Err(GateDenial::TooShort);
    }
    let ctx = RequestContext::acquire(api).await.map_err(|_| GateDenial::CsrfUnavailable)?;
    match api.check_password(&ctx, &firma.id, &PasswordCheckRequest { password }).await {
        Ok(true) => Ok(EditGrant { firma: firma.clone() }),
        Ok(false) => Err(GateDenial::WrongPassword),
        Err(e) => {
            log::error!("password check for {} failed: {e}", firma.id);
            Err(GateDenial::WrongPassword)
        }
    }
}
