//! In-memory copy of the company list for one page view.
//!
//! DESIGN
//! ======
//! The backend owns the records; this is only what the current view last
//! fetched. Mutations are applied after the backend confirmed them, so there
//! is never anything to roll back.

#[cfg(test)]
#[path = "firmen_test.rs"]
mod firmen_test;

use crate::net::types::{Firma, FirmaId, FirmaStatus};

#[derive(Clone, Debug, Default)]
pub struct FirmenState {
    pub items: Vec<Firma>,
    pub loading: bool,
    /// Public-list search term, already sanitized.
    pub search: String,
}

impl FirmenState {
    pub fn replace_all(&mut self, items: Vec<Firma>) {
        self.items = items;
    }

    /// Set the status of the record with `id`. Returns whether it was found.
    pub fn apply_status(&mut self, id: &FirmaId, status: FirmaStatus) -> bool {
        match self.items.iter_mut().find(|f| f.id == *id) {
            Some(firma) => {
                firma.status = status;
                true
            }
            None => false,
        }
    }

    /// Drop the record with `id`. Returns whether it was present.
    pub fn remove(&mut self, id: &FirmaId) -> bool {
        let before = self.items.len();
        self.items.retain(|f| f.id != *id);
        self.items.len() != before
    }

    /// Records matching the current search term.
    pub fn visible(&self) -> Vec<Firma> {
        filter_by_name(&self.items, &self.search)
    }
}

/// Case-insensitive substring match on the company name. An empty query
/// matches everything.
pub fn filter_by_name(items: &[Firma], query: &str) -> Vec<Firma> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|f| needle.is_empty() || f.firmenname.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
