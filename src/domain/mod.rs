//! Shared data model layer (structs/enums only).
//!
//! ## Files
//! - `models.rs` — unit status, hook outcome, report/output structs.
//! - `errors.rs` — the named failure kinds of the association flow.
//!
//! Domain types are data-only: no subprocess or filesystem side effects.

pub mod errors;
pub mod models;
