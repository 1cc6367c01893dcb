//! Edit form state and the in-memory navigation hand-off.
//!
//! DESIGN
//! ======
//! The list view passes the approved record to the edit view through
//! [`EditTarget`] instead of the URL, so only records that passed the password
//! gate in this page view can be edited. The password itself is never part of
//! the hand-off.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use crate::net::types::{Firma, FirmaField};
use crate::util::sanitize::sanitize;

/// Record approved for editing, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditTarget(pub Option<Firma>);

impl EditTarget {
    /// The approved record when its identifier matches the route parameter.
    pub fn for_route(&self, route_id: &str) -> Option<&Firma> {
        self.0.as_ref().filter(|firma| firma.id.to_string() == route_id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditForm {
    pub firmenname: String,
    pub adresse: String,
    pub kontaktperson: String,
    pub email: String,
    pub telefon: String,
}

impl EditForm {
    pub fn from_firma(firma: &Firma) -> Self {
        Self {
            firmenname: firma.firmenname.clone(),
            adresse: firma.adresse.clone(),
            kontaktperson: firma.kontaktperson.clone(),
            email: firma.email.clone(),
            telefon: firma.telefon.clone(),
        }
    }

    pub fn field(&self, field: FirmaField) -> &str {
        match field {
            FirmaField::Firmenname => &self.firmenname,
            FirmaField::Adresse => &self.adresse,
            FirmaField::Kontaktperson => &self.kontaktperson,
            FirmaField::Email => &self.email,
            FirmaField::Telefon => &self.telefon,
        }
    }

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

    /// Full record to `PUT`: sanitized form values over `original`, keeping
    /// the original value wherever a field was left empty. Identifier and
    /// status always come from `original`.
    pub fn merge_over(&self, original: &Firma) -> Firma {
        let pick = |edited: &str, fallback: &str| {
            let clean = sanitize(edited).trim().to_owned();
            if clean.is_empty() { fallback.to_owned() } else { clean }
        };
        Firma {
            id: original.id.clone(),
            firmenname: pick(&self.firmenname, &original.firmenname),
            adresse: pick(&self.adresse, &original.adresse),
            kontaktperson: pick(&self.kontaktperson, &original.kontaktperson),
            email: pick(&self.email, &original.email),
            telefon: pick(&self.telefon, &original.telefon),
            status: original.status,
        }
    }
}
