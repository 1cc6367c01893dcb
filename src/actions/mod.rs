//! User-gesture handlers, one async function per operation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages gather input from signals, call an action with the [`HttpApi`], and
//! apply the outcome back to their state. Actions never touch the DOM, so the
//! whole CSRF-guarded mutation flow runs against any [`FirmaApi`].
//!
//! Every mutating action acquires its own [`RequestContext`] right before the
//! call. Calls within one action run sequentially.
//!
//! [`HttpApi`]: crate::net::api::HttpApi
//! [`FirmaApi`]: crate::net::api::FirmaApi
//! [`RequestContext`]: crate::net::context::RequestContext

pub mod admin;
pub mod edit;
pub mod list;
pub mod registration;
