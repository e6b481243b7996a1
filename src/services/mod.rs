//! Service layer containing side-effect helpers.
//!
//! ## Service map
//! - `runner.rs` — subprocess execution seam (`CommandRunner`).
//! - `juju.rs` — hook-tool facade (status-set / is-leader / config-get).
//! - `metadata.rs` — EC2 instance identity lookup.
//! - `aws.rs` — Elastic IP allocation lookup + association.
//! - `snap.rs` — snap package installation.
//! - `output.rs` — JSON/text report output.
//!
//! ## Conventions
//! - Every external invocation goes through `CommandRunner`.
//! - Keep hook handlers thin; failure-to-status mapping stays in `commands/*`.

pub mod aws;
pub mod juju;
pub mod metadata;
pub mod output;
pub mod runner;
pub mod snap;
