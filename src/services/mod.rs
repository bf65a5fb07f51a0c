//! Service layer containing the procedures and the host-facing ports.
//!
//! ## Service map
//! - `provision.rs`: `setup`: packages, interpreter, environment, manifest.
//! - `launch.rs`: `run` and `dashboard` entry-point invocations.
//! - `ports.rs`: the capability bundle handed to every procedure.
//! - `packages.rs`: `PackageManager` port + apt implementation.
//! - `runtime.rs`: `RuntimeProvider` port + pyenv implementation, interpreter remediation.
//! - `fs.rs`: `Filesystem` port + local implementation.
//! - `prompt.rs`: `Prompter` port (terminal / assume-yes).
//! - `process.rs`: `Runner` port + `std::process` implementation.
//! - `venv.rs`: virtual environment creation and activation.
//! - `host.rs`: privilege and os-release checks.
//! - `stamp.rs`: setup stamp persistence + manifest fingerprint.
//! - `config.rs`: `ocrkit.toml` loading and validation.
//! - `output.rs`: console/JSON output helpers.
//!
//! ## Conventions
//! - Procedures only reach the host through `Ports`.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod fs;
pub mod host;
pub mod launch;
pub mod output;
pub mod packages;
pub mod ports;
pub mod process;
pub mod prompt;
pub mod provision;
pub mod runtime;
pub mod stamp;
pub mod venv;

#[cfg(test)]
pub mod testing;
