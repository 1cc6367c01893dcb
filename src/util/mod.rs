//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (dialogs, storage
//! signals) and pure input handling (sanitizing, validation) from page logic.

pub mod alert;
pub mod sanitize;
pub mod status_bus;
pub mod validate;
