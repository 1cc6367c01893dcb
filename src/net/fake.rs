//! In-memory `FirmaApi` used by unit tests. Records every call so tests can
//! assert on what did (or did not) reach the backend.

use std::cell::RefCell;

use super::api::FirmaApi;
use super::context::RequestContext;
use super::types::{Firma, FirmaId, FirmaStatus, LoginRequest, NewFirma, PasswordCheckRequest};
use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    CsrfToken,
    AdminLogin { username: String, password: String, token: String },
    ListFirmen,
    Register { body: NewFirma, token: String },
    PatchStatus { id: FirmaId, status: FirmaStatus, token: String },
    Update { firma: Firma, token: String },
    Delete { id: FirmaId, token: String },
    CheckPassword { id: FirmaId, password: String, token: String },
}

#[derive(Default)]
pub(crate) struct FakeApi {
    token: String,
    firmen: Vec<Firma>,
    login_valid: bool,
    password_valid: bool,
    failure: Option<ApiError>,
    calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self { token: "tok-1".to_owned(), ..Self::default() }
    }

    pub(crate) fn with_token(mut self, token: &str) -> Self {
        self.token = token.to_owned();
        self
    }

    pub(crate) fn with_firmen(mut self, firmen: Vec<Firma>) -> Self {
        self.firmen = firmen;
        self
    }

    pub(crate) fn accepting_login(mut self) -> Self {
        self.login_valid = true;
        self
    }

    pub(crate) fn accepting_password(mut self) -> Self {
        self.password_valid = true;
        self
    }

    /// Make every call except the token fetch fail with `err`.
    pub(crate) fn failing(mut self, err: ApiError) -> Self {
        self.failure = Some(err);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Calls other than the token fetch.
    pub(crate) fn backend_calls(&self) -> Vec<Call> {
        self.calls().into_iter().filter(|c| *c != Call::CsrfToken).collect()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl FirmaApi for FakeApi {
    async fn fetch_csrf_token(&self) -> String {
        self.calls.borrow_mut().push(Call::CsrfToken);
        self.token.clone()
    }

    async fn admin_login(&self, ctx: &RequestContext, body: &LoginRequest) -> Result<bool, ApiError> {
        self.record(Call::AdminLogin {
            username: body.username.clone(),
            password: body.password.clone(),
            token: ctx.csrf_token().to_owned(),
        })?;
        Ok(self.login_valid)
    }

    async fn list_firmen(&self) -> Result<Vec<Firma>, ApiError> {
        self.record(Call::ListFirmen)?;
        Ok(self.firmen.clone())
    }

    async fn register_firma(&self, ctx: &RequestContext, body: &NewFirma) -> Result<(), ApiError> {
        self.record(Call::Register { body: body.clone(), token: ctx.csrf_token().to_owned() })
    }

    async fn patch_status(&self, ctx: &RequestContext, id: &FirmaId, status: FirmaStatus) -> Result<FirmaStatus, ApiError> {
        self.record(Call::PatchStatus { id: id.clone(), status, token: ctx.csrf_token().to_owned() })?;
        Ok(status)
    }

    async fn update_firma(&self, ctx: &RequestContext, firma: &Firma) -> Result<(), ApiError> {
        self.record(Call::Update { firma: firma.clone(), token: ctx.csrf_token().to_owned() })
    }

    async fn delete_firma(&self, ctx: &RequestContext, id: &FirmaId) -> Result<(), ApiError> {
        self.record(Call::Delete { id: id.clone(), token: ctx.csrf_token().to_owned() })
    }

    async fn check_password(&self, ctx: &RequestContext, id: &FirmaId, body: &PasswordCheckRequest) -> Result<bool, ApiError> {
        self.record(Call::CheckPassword {
            id: id.clone(),
            password: body.password.clone(),
            token: ctx.csrf_token().to_owned(),
        })?;
        Ok(self.password_valid)
    }
}

/// Record fixture with every field filled in.
pub(crate) fn firma(id: i64, name: &str, status: FirmaStatus) -> Firma {
    Firma {
        id: FirmaId::Number(id),
        firmenname: name.to_owned(),
        adresse: format!("{name} Strasse 1"),
        kontaktperson: "Kim Muster".to_owned(),
        email: "info@muster.ch".to_owned(),
        telefon: "+41791234567".to_owned(),
        status,
    }
}
