//! Hook handler layer.
//!
//! Parse/match the invoked hook here, delegate the external work to
//! `services/*`, and keep the failure-to-status mapping at the call sites.

pub mod hooks;

pub use hooks::handle_hook;
