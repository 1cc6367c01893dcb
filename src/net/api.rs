//! REST client for the company-application backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, always credentialed so
//! the session and CSRF cookies travel with each request.
//! Native builds (tests): stubs returning [`ApiError::Unavailable`], since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result` so pages can log and alert instead of
//! panicking. The token fetch is the exception: it returns an empty string on
//! any failure and [`RequestContext::acquire`] turns that into a hard error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use super::types::{CsrfTokenResponse, StatusPatch, ValidResponse};
use super::context::RequestContext;
use super::types::{Firma, FirmaId, FirmaStatus, LoginRequest, NewFirma, PasswordCheckRequest};
use crate::config::ClientConfig;
use crate::error::ApiError;

/// Header carrying the anti-forgery token on mutating calls.
pub const CSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Every backend operation the front end consumes.
///
/// Mutating calls take a [`RequestContext`], so a call site cannot issue one
/// without first acquiring a fresh CSRF token.
#[allow(async_fn_in_trait)]
pub trait FirmaApi {
    /// `GET /csrf-token`. Returns an empty string on network or parse failure.
    async fn fetch_csrf_token(&self) -> String;

    /// `POST /admin/login`. `Ok(true)` only on an explicit `valid: true`.
    async fn admin_login(&self, ctx: &RequestContext, body: &LoginRequest) -> Result<bool, ApiError>;

    /// `GET /firma`.
    async fn list_firmen(&self) -> Result<Vec<Firma>, ApiError>;

    /// `POST /firma/register`.
    async fn register_firma(&self, ctx: &RequestContext, body: &NewFirma) -> Result<(), ApiError>;

    /// `PATCH /firma/{id}` with only the status. Returns the status the
    /// backend reports back.
    async fn patch_status(&self, ctx: &RequestContext, id: &FirmaId, status: FirmaStatus) -> Result<FirmaStatus, ApiError>;

    /// `PUT /firma/{id}` with the full record.
    async fn update_firma(&self, ctx: &RequestContext, firma: &Firma) -> Result<(), ApiError>;

    /// `DELETE /firma/{id}`.
    async fn delete_firma(&self, ctx: &RequestContext, id: &FirmaId) -> Result<(), ApiError>;

    /// `POST /firma/check-passwort/{id}`. `Ok(true)` only on `valid: true`.
    async fn check_password(&self, ctx: &RequestContext, id: &FirmaId, body: &PasswordCheckRequest) -> Result<bool, ApiError>;
}

#[cfg(any(test, feature = "csr"))]
fn csrf_endpoint(base: &str) -> String {
    format!("{base}/csrf-token")
}

#[cfg(any(test, feature = "csr"))]
fn admin_login_endpoint(base: &str) -> String {
    format!("{base}/admin/login")
}

#[cfg(any(test, feature = "csr"))]
fn firma_collection_endpoint(base: &str) -> String {
    format!("{base}/firma")
}

#[cfg(any(test, feature = "csr"))]
fn register_endpoint(base: &str) -> String {
    format!("{base}/firma/register")
}

#[cfg(any(test, feature = "csr"))]
fn firma_endpoint(base: &str, id: &FirmaId) -> String {
    format!("{base}/firma/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn check_password_endpoint(base: &str, id: &FirmaId) -> String {
    format!("{base}/firma/check-passwort/{id}")
}

/// Extract the message of an `{ error }` body, if the body has that shape.
#[cfg(any(test, feature = "csr"))]
fn error_message_from_body(raw: &str) -> Option<String> {
    serde_json::from_str::<super::types::ErrorBody>(raw).ok().map(|body| body.error)
}

/// Status echoed by the `PATCH` response. Older backends answer with the
/// full record, newer ones may omit it; the requested value is used then.
#[cfg(any(test, feature = "csr"))]
fn echoed_status(raw: &str, requested: FirmaStatus) -> FirmaStatus {
    #[derive(serde::Deserialize)]
    struct StatusEcho {
        status: Option<FirmaStatus>,
    }
    serde_json::from_str::<StatusEcho>(raw).ok().and_then(|echo| echo.status).unwrap_or(requested)
}

/// `gloo-net` backed implementation rooted at the configured API base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base.clone())
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

#[cfg(feature = "csr")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::Serialize;
    use web_sys::RequestCredentials;

    use super::{CSRF_HEADER, error_message_from_body};
    use crate::error::ApiError;
    use crate::net::context::RequestContext;

    pub(super) fn credentialed(builder: RequestBuilder) -> RequestBuilder {
        builder.credentials(RequestCredentials::Include)
    }

    pub(super) fn guarded(builder: RequestBuilder, ctx: &RequestContext) -> RequestBuilder {
        credentialed(builder).header(CSRF_HEADER, ctx.csrf_token())
    }

    pub(super) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(resp).await
    }

    pub(super) async fn send_json<T: Serialize>(builder: RequestBuilder, body: &T) -> Result<Response, ApiError> {
        let req = builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(resp).await
    }

    async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let message = resp.text().await.ok().and_then(|raw| error_message_from_body(&raw));
        Err(ApiError::Status { status, message })
    }

    pub(super) async fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl FirmaApi for HttpApi {
    async fn fetch_csrf_token(&self) -> String {
        #[cfg(feature = "csr")]
        {
            let builder = http::credentialed(gloo_net::http::Request::get(&csrf_endpoint(&self.base)));
            let token = match http::send(builder).await {
                Ok(resp) => http::decode::<CsrfTokenResponse>(resp).await.map(|body| body.token),
                Err(e) => Err(e),
            };
            token.unwrap_or_else(|e| {
                log::warn!("csrf token fetch failed: {e}");
                String::new()
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    }

    async fn admin_login(&self, ctx: &RequestContext, body: &LoginRequest) -> Result<bool, ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = http::guarded(gloo_net::http::Request::post(&admin_login_endpoint(&self.base)), ctx)
                .header("Accept", "application/json");
            let resp = http::send_json(builder, body).await?;
            Ok(http::decode::<ValidResponse>(resp).await?.valid)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ctx, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn list_firmen(&self) -> Result<Vec<Firma>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = http::credentialed(gloo_net::http::Request::get(&firma_collection_endpoint(&self.base)))
                .header("Accept", "application/json");
            let resp = http::send(builder).await?;
            let rows = http::decode::<Vec<serde_json::Value>>(resp).await?;
            Ok(Firma::from_rows(rows))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn register_firma(&self, ctx: &RequestContext, body: &NewFirma) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = http::guarded(gloo_net::http::Request::post(&register_endpoint(&self.base)), ctx);
            http::send_json(builder, body).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ctx, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn patch_status(&self, ctx: &RequestContext, id: &FirmaId, status: FirmaStatus) -> Result<FirmaStatus, ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = http::guarded(gloo_net::http::Request::patch(&firma_endpoint(&self.base, id)), ctx);
            let resp = http::send_json(builder, &StatusPatch { status }).await?;
            let raw = resp.text().await.unwrap_or_default();
            Ok(echoed_status(&raw, status))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ctx, id, status);
            Err(ApiError::Unavailable)
        }
    }

    async fn update_firma(&self, ctx: &RequestContext, firma: &Firma) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = http::guarded(gloo_net::http::Request::put(&firma_endpoint(&self.base, &firma.id)), ctx);
            http::send_json(builder, firma).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ctx, firma);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_firma(&self, ctx: &RequestContext, id: &FirmaId) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = http::guarded(gloo_net::http::Request::delete(&firma_endpoint(&self.base, id)), ctx);
            http::send(builder).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ctx, id);
            Err(ApiError::Unavailable)
        }
    }

    async fn check_password(&self, ctx: &RequestContext, id: &FirmaId, body: &PasswordCheckRequest) -> Result<bool, ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = http::guarded(gloo_net::http::Request::post(&check_password_endpoint(&self.base, id)), ctx);
            let resp = http::send_json(builder, body).await?;
            Ok(http::decode::<ValidResponse>(resp).await?.valid)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ctx, id, body);
            Err(ApiError::Unavailable)
        }
    }
}
