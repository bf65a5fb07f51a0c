use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::errors::OpsError;
pub use domain::models::*;
pub use services::config::{load_profile, resolve_project_dir};
pub use services::fs::LocalFs;
pub use services::host::{is_elevated, preflight};
pub use services::launch::{launch_dashboard, run_ocr};
pub use services::output::{print_error, print_one, Console};
pub use services::packages::Apt;
pub use services::ports::Ports;
pub use services::process::SystemRunner;
pub use services::prompt::{AssumeYes, Prompter, TerminalPrompter};
pub use services::provision::provision;
pub use services::runtime::Pyenv;

fn main() -> ExitCode {
    // Parse failures (no subcommand, unknown subcommand) exit with 1, not clap's 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            print_error(cli.json, &err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("OCRKIT_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // Privilege comes first; the os-release path may come from ocrkit.toml.
    if !is_elevated() {
        return Err(OpsError::NotElevated.into());
    }
    let project_dir = resolve_project_dir(cli.project_dir.as_deref())?;
    let profile = load_profile(&project_dir)?;
    tracing::debug!(project = %project_dir.display(), python = %profile.python.full, "profile loaded");

    preflight(&profile.layout.os_release)?;
    if !handle_host_commands(cli, &profile)? {
        anyhow::bail!("unhandled command");
    }
    Ok(())
}
