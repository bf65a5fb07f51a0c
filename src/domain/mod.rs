//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep settings and report structs in one place.
//! - Avoid cyclic imports between commands and services.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs`: settings, setup stamp, report/output structs.
//! - `constants.rs`: stable defaults (pinned version, package set, names).
//! - `errors.rs`: the `OpsError` taxonomy and its stable codes.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod errors;
pub mod models;
