use crate::*;

/// `setup`, `run`, `dashboard`. Called only after the host preflight passed.
pub fn handle_host_commands(cli: &Cli, profile: &Profile) -> anyhow::Result<bool> {
    let runner = SystemRunner::new(cli.json);
    let apt = Apt::new(&runner);
    let pyenv = Pyenv::new(&runner, profile.pyenv_installer.clone());
    let terminal = TerminalPrompter;
    let assume_yes = AssumeYes;
    let prompt: &dyn Prompter = if cli.assume_yes {
        &assume_yes
    } else {
        &terminal
    };
    let ports = Ports {
        packages: &apt,
        runtime: &pyenv,
        fs: &LocalFs,
        prompt,
        runner: &runner,
        console: Console::new(cli.json),
    };

    match &cli.command {
        Commands::Setup => {
            let report = provision(&ports, profile)?;
            print_one(cli.json, report, |r| {
                format!(
                    "environment {} ready (Python {}, {} packages installed)",
                    r.environment,
                    r.python_version,
                    r.installed_packages.len()
                )
            })?;
        }
        Commands::Run { directory } => {
            let report = run_ocr(&ports, profile, directory.as_deref())?;
            print_one(cli.json, report, |r| format!("output: {}", r.output))?;
        }
        Commands::Dashboard => {
            let report = launch_dashboard(&ports, profile)?;
            print_one(cli.json, report, |r| format!("dashboard for {} exited", r.output))?;
        }
    }

    Ok(true)
}
