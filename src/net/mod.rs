//! Networking modules for the backend REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `context` hands out the per-operation CSRF
//! context mutating calls require, and `types` defines the wire schema.

pub mod api;
pub mod context;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;
