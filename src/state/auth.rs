//! Admin authorization gate for the current page view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two states: `Unauthenticated` and `Authorized`. The only transition is a
//! backend-confirmed login; there is no logout and nothing is persisted, so a
//! reload starts unauthenticated again. The admin listing requires an
//! [`AdminSession`] by reference, which only exists once authorized.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::ApiError;

/// Proof that the backend confirmed the admin credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminSession {
    username: String,
}

impl AdminSession {
    /// Only the login action may mint a session.
    pub(crate) fn confirmed(username: String) -> Self {
        Self { username }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AdminGate {
    #[default]
    Unauthenticated,
    Authorized(AdminSession),
}

impl AdminGate {
    pub fn session(&self) -> Option<&AdminSession> {
        match self {
            Self::Authorized(session) => Some(session),
            Self::Unauthenticated => None,
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.session().is_some()
    }
}

/// Login form state plus the gate.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub gate: AdminGate,
    pub username: String,
    pub password: String,
    pub checking: bool,
}

impl AuthState {
    /// Apply the outcome of a login attempt. Failures leave the gate closed;
    /// an already authorized gate stays authorized.
    pub fn apply_login(&mut self, outcome: &Result<AdminSession, ApiError>) {
        self.checking = false;
        if let Ok(session) = outcome {
            if !self.gate.is_authorized() {
                self.gate = AdminGate::Authorized(session.clone());
                self.password.clear();
            }
        }
    }
}
