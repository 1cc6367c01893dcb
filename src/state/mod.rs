//! Client state containers.
//!
//! DESIGN
//! ======
//! Plain structs with the transitions pages need, wrapped in `RwSignal` by
//! the page that owns them. Keeping them free of Leptos types keeps the
//! transitions unit-testable.

pub mod auth;
pub mod edit;
pub mod firmen;
pub mod registration;
