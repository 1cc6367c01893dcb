//! # firmen-portal
//!
//! Leptos + WASM frontend for the company application platform. Companies
//! register through a form, an admin triages submissions, and a public list
//! shows the application status of every registered company.
//!
//! All persistence, validation of record ownership, and authentication live in
//! the backend REST service; this crate holds the routing, form state,
//! CSRF-guarded request plumbing, and the cross-view change notifier.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
