//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `host.rs`: `setup`/`run`/`dashboard`, wires the real ports.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate procedures to `services/*`.
//! - Keep behavior and output schema stable.

pub mod host;

pub use host::handle_host_commands;
