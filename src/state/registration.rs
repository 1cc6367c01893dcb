//! Registration form state and client-side validation.
//!
//! Every validation failure is collected so the form can show them all at
//! once. Validation runs on the sanitized values that would be submitted.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::config::PasswordRetention;
use crate::net::types::{FirmaField, FirmaStatus, NewFirma};
use crate::util::sanitize::sanitize;
use crate::util::validate::{is_valid_email, is_valid_password, is_valid_phone};

pub const FIRMENNAME_REQUIRED: &str = "Firmenname ist erforderlich.";
pub const ADRESSE_REQUIRED: &str = "Adresse ist erforderlich.";
pub const EMAIL_REQUIRED: &str = "E-Mail ist erforderlich.";
pub const TELEFON_REQUIRED: &str = "Telefonnummer ist erforderlich.";
pub const PASSWORT_REQUIRED: &str = "Passwort ist erforderlich.";
pub const EMAIL_INVALID: &str = "Bitte geben Sie eine gültige E-Mail-Adresse ein (mit .ch oder .com).";
pub const PASSWORT_TOO_SHORT: &str = "Das Passwort muss mindestens 5 Zeichen lang sein.";
pub const TELEFON_INVALID: &str =
    "Bitte geben Sie eine gültige Telefonnummer für die Schweiz (+41) oder Deutschland (+49) ein.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub firmenname: String,
    pub adresse: String,
    pub kontaktperson: String,
    pub email: String,
    pub telefon: String,
    pub passwort: String,
}

impl RegistrationForm {
    pub fn field(&self, field: FirmaField) -> &str {
        match field {
            FirmaField::Firmenname => &self.firmenname,
            FirmaField::Adresse => &self.adresse,
            FirmaField::Kontaktperson => &self.kontaktperson,
            FirmaField::Email => &self.email,
            FirmaField::Telefon => &self.telefon,
        }
    }

    /// Store a keystroke's value, sanitized.
    pub fn set_field(&mut self, field: FirmaField, raw: &str) {
        let slot = match field {
            FirmaField::Firmenname => &mut self.firmenname,
            FirmaField::Adresse => &mut self.adresse,
            FirmaField::Kontaktperson => &mut self.kontaktperson,
            FirmaField::Email => &mut self.email,
            FirmaField::Telefon => &mut self.telefon,
        };
        *slot = sanitize(raw);
    }

    pub fn set_passwort(&mut self, raw: &str) {
        self.passwort = sanitize(raw);
    }

    /// The payload that would be submitted: every field sanitized again and
    /// trimmed, status always `offen`.
    pub fn submission(&self) -> NewFirma {
        let clean = |value: &str| sanitize(value).trim().to_owned();
        NewFirma {
            firmenname: clean(&self.firmenname),
            adresse: clean(&self.adresse),
            kontaktperson: clean(&self.kontaktperson),
            email: clean(&self.email),
            telefon: clean(&self.telefon),
            passwort: sanitize(&self.passwort),
            status: FirmaStatus::Offen,
        }
    }

    /// Validate the submission.
    ///
    /// # Errors
    ///
    /// Returns every failure message, in form order, when anything is off.
    pub fn validate(&self) -> Result<NewFirma, Vec<String>> {
        let submission = self.submission();
        let errors = validation_errors(&submission);
        if errors.is_empty() { Ok(submission) } else { Err(errors) }
    }

    /// Clear the form after a successful registration. The password field
    /// follows `retention`.
    pub fn reset_after_submit(&mut self, retention: PasswordRetention) {
        let passwort = match retention {
            PasswordRetention::Retain => std::mem::take(&mut self.passwort),
            PasswordRetention::Clear => String::new(),
        };
        *self = Self { passwort, ..Self::default() };
    }
}

fn validation_errors(submission: &NewFirma) -> Vec<String> {
    let mut errors = Vec::new();
    let required = [
        (&submission.firmenname, FIRMENNAME_REQUIRED),
        (&submission.adresse, ADRESSE_REQUIRED),
        (&submission.email, EMAIL_REQUIRED),
        (&submission.telefon, TELEFON_REQUIRED),
        (&submission.passwort, PASSWORT_REQUIRED),
    ];
    for (value, message) in required {
        if value.trim().is_empty() {
            errors.push(message.to_owned());
        }
    }

    if !submission.email.is_empty() && !is_valid_email(&submission.email) {
        errors.push(EMAIL_INVALID.to_owned());
    }
    if !submission.passwort.trim().is_empty() && !is_valid_password(&submission.passwort) {
        errors.push(PASSWORT_TOO_SHORT.to_owned());
    }
    if !submission.telefon.is_empty() && !is_valid_phone(&submission.telefon) {
        errors.push(TELEFON_INVALID.to_owned());
    }
    errors
}
