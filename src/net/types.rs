//! Wire DTOs for the company-application backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's German JSON schema. The record type has
//! no password field at all, so a password can neither be rendered nor echoed
//! back in a full-record update.
//!
//! Records coming from the backend are read leniently: `null` text fields
//! become empty strings and pass through the sanitizer, a `null` status reads
//! as the default, and a list is decoded row by row so one malformed record
//! cannot hide the others.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::util::sanitize::sanitize_opt;

/// Backend-assigned record identifier. Opaque to the client; the backend may
/// send numbers or strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FirmaId {
    Number(i64),
    Text(String),
}

impl fmt::Display for FirmaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Application status of a company. Only admins change it; any value may
/// follow any other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirmaStatus {
    #[default]
    #[serde(rename = "offen")]
    Offen,
    #[serde(rename = "in Arbeit")]
    InArbeit,
    #[serde(rename = "versendet")]
    Versendet,
}

impl FirmaStatus {
    pub const ALL: [Self; 3] = [Self::Offen, Self::InArbeit, Self::Versendet];

    /// Wire value, also used as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Offen => "offen",
            Self::InArbeit => "in Arbeit",
            Self::Versendet => "versendet",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Offen => "Offen",
            Self::InArbeit => "In Arbeit",
            Self::Versendet => "Versendet",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Offen => "status-offen",
            Self::InArbeit => "status-in-arbeit",
            Self::Versendet => "status-versendet",
        }
    }

    /// Parse a wire value as produced by [`FirmaStatus::as_str`].
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// A registered company as returned by `GET /firma`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Firma {
    pub id: FirmaId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub firmenname: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub adresse: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub kontaktperson: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub telefon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: FirmaStatus,
}

impl Firma {
    /// Decode the rows of a `GET /firma` payload. Rows that do not decode,
    /// such as an unknown status value, are logged and skipped.
    pub fn from_rows(rows: Vec<serde_json::Value>) -> Vec<Self> {
        rows.into_iter()
            .enumerate()
            .filter_map(|(index, row)| {
                serde_json::from_value(row)
                    .inspect_err(|e| log::warn!("skipping company row {index}: {e}"))
                    .ok()
            })
            .collect()
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(sanitize_opt(raw.as_deref()))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Free-text fields shared by the registration and edit forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirmaField {
    Firmenname,
    Adresse,
    Kontaktperson,
    Email,
    Telefon,
}

impl FirmaField {
    pub const ALL: [Self; 5] = [Self::Firmenname, Self::Adresse, Self::Kontaktperson, Self::Email, Self::Telefon];

    pub fn label(self) -> &'static str {
        match self {
            Self::Firmenname => "Firmenname",
            Self::Adresse => "Adresse",
            Self::Kontaktperson => "Kontaktperson",
            Self::Email => "E-Mail",
            Self::Telefon => "Telefonnummer",
        }
    }

    /// Registration placeholder; required fields carry a `*`.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Firmenname => "Firmenname*",
            Self::Adresse => "Adresse*",
            Self::Kontaktperson => "Kontaktperson",
            Self::Email => "E-Mail*",
            Self::Telefon => "Telefonnummer*",
        }
    }

    /// Name attribute of the form input, matching the wire field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Firmenname => "firmenname",
            Self::Adresse => "adresse",
            Self::Kontaktperson => "kontaktperson",
            Self::Email => "email",
            Self::Telefon => "telefon",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }

    pub fn read(self, firma: &Firma) -> &str {
        match self {
            Self::Firmenname => &firma.firmenname,
            Self::Adresse => &firma.adresse,
            Self::Kontaktperson => &firma.kontaktperson,
            Self::Email => &firma.email,
            Self::Telefon => &firma.telefon,
        }
    }
}

/// Body of the registration `POST`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewFirma {
    pub firmenname: String,
    pub adresse: String,
    pub kontaktperson: String,
    pub email: String,
    pub telefon: String,
    pub passwort: String,
    pub status: FirmaStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordCheckRequest {
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusPatch {
    pub status: FirmaStatus,
}

/// `{ valid }` answer of the login and password-check endpoints. A missing
/// flag counts as `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ValidResponse {
    #[serde(default)]
    pub valid: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CsrfTokenResponse {
    #[serde(default)]
    pub token: String,
}

/// Error body some endpoints return alongside a non-success status.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
