//! Full-record update behind the password gate.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use crate::error::ApiError;
use crate::net::api::FirmaApi;
use crate::net::context::RequestContext;
use crate::net::types::Firma;
use crate::state::edit::EditForm;

pub const UPDATE_FAILED_MESSAGE: &str = "Fehler beim Aktualisieren der Firma";

/// Merge the form over `original` and `PUT` the result. Last write wins.
///
/// # Errors
///
/// [`ApiError::MissingCsrfToken`] or the error of the `PUT` call.
pub async fn submit_update<A: FirmaApi>(api: &A, original: &Firma, form: &EditForm) -> Result<Firma, ApiError> {
    let updated = form.merge_over(original);
    let ctx = RequestContext::acquire(api).await?;
    api.update_firma(&ctx, &updated)
        .await
        .inspect_err(|e| log::error!("updating {} failed: {e}", updated.id))?;
    log::info!("company {} updated", updated.id);
    Ok(updated)
}
