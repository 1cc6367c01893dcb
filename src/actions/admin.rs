//! Admin login and triage actions.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::error::{ApiError, CSRF_UNAVAILABLE_MESSAGE};
use crate::net::api::FirmaApi;
use crate::net::context::RequestContext;
use crate::net::types::{Firma, FirmaId, FirmaStatus, LoginRequest};
use crate::state::auth::AdminSession;
use crate::util::sanitize::sanitize_trimmed;
use crate::util::status_bus::StatusBus;

pub const LOGIN_REJECTED_MESSAGE: &str = "Benutzername oder Passwort sind falsch";
pub const DELETE_CONFIRM_MESSAGE: &str = "Bist du sicher, dass du diese Firma löschen möchtest?";
pub const STATUS_UPDATE_FAILED_MESSAGE: &str = "Fehler beim Aktualisieren des Status.";
pub const DELETE_FAILED_MESSAGE: &str = "Fehler beim Löschen der Firma.";

/// Check admin credentials with the backend.
///
/// # Errors
///
/// [`ApiError::MissingCsrfToken`] when no token could be fetched,
/// [`ApiError::Rejected`] when the backend did not answer `valid: true`, or
/// the transport error of the login call.
pub async fn login<A: FirmaApi>(api: &A, username: &str, password: &str) -> Result<AdminSession, ApiError> {
    let body = LoginRequest { username: sanitize_trimmed(username), password: sanitize_trimmed(password) };
    let ctx = RequestContext::acquire(api).await?;
    match api.admin_login(&ctx, &body).await {
        Ok(true) => {
            log::info!("admin login confirmed");
            Ok(AdminSession::confirmed(body.username))
        }
        Ok(false) => Err(ApiError::Rejected),
        Err(e) => {
            log::error!("admin login check failed: {e}");
            Err(e)
        }
    }
}

/// Alert text for a failed login. Only a missing token is told apart; any
/// other failure reads as wrong credentials.
pub fn login_failure_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::MissingCsrfToken => CSRF_UNAVAILABLE_MESSAGE,
        _ => LOGIN_REJECTED_MESSAGE,
    }
}

/// Fetch every record for the triage list. Requires an authorized session.
///
/// # Errors
///
/// Returns the transport or status error; callers keep their previous list.
pub async fn load_firmen<A: FirmaApi>(api: &A, session: &AdminSession) -> Result<Vec<Firma>, ApiError> {
    let firmen = api.list_firmen().await.inspect_err(|e| log::error!("fetching companies failed: {e}"))?;
    log::debug!("loaded {} companies for {}", firmen.len(), session.username());
    Ok(firmen)
}

/// Set a record's status and announce the change to other views.
///
/// Returns the status the backend confirmed; apply it to local state only
/// after this succeeds.
///
/// # Errors
///
/// [`ApiError::MissingCsrfToken`] or the error of the `PATCH` call. Nothing
/// is published on failure.
pub async fn change_status<A: FirmaApi>(
    api: &A,
    bus: &StatusBus,
    id: &FirmaId,
    status: FirmaStatus,
) -> Result<FirmaStatus, ApiError> {
    let ctx = RequestContext::acquire(api).await?;
    let confirmed = api
        .patch_status(&ctx, id, status)
        .await
        .inspect_err(|e| log::error!("updating status of {id} failed: {e}"))?;
    bus.publish();
    log::info!("status of {id} set to {}", confirmed.as_str());
    Ok(confirmed)
}

/// Delete a record and announce the change to other views. Confirmation is
/// the caller's job.
///
/// # Errors
///
/// [`ApiError::MissingCsrfToken`] or the error of the `DELETE` call.
pub async fn delete_firma<A: FirmaApi>(api: &A, bus: &StatusBus, id: &FirmaId) -> Result<(), ApiError> {
    let ctx = RequestContext::acquire(api).await?;
    api.delete_firma(&ctx, id).await.inspect_err(|e| log::error!("deleting {id} failed: {e}"))?;
    bus.publish();
    log::info!("company {id} deleted");
    Ok(())
}
