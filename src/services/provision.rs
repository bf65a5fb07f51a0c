use crate::domain::errors::OpsError;
use crate::domain::models::{Profile, SetupReport, SetupStamp};
use crate::services::packages::ensure_packages;
use crate::services::ports::Ports;
use crate::services::runtime::ensure_interpreter;
use crate::services::stamp::{manifest_digest, unix_now, write_stamp};
use crate::services::venv::VirtualEnv;
use std::path::Path;

/// `setup`: packages, interpreter, fresh environment, manifest install.
pub fn provision(ports: &Ports, profile: &Profile) -> Result<SetupReport, OpsError> {
    let layout = &profile.layout;

    ports.console.step("Updating package index");
    ports.packages.refresh_index()?;

    ports.console.step(format!(
        "Checking {} system packages",
        profile.packages.len()
    ));
    let installed = ensure_packages(ports.packages, &profile.packages)?;
    if installed.is_empty() {
        ports.console.ok("all system packages present");
    } else {
        ports
            .console
            .ok(format!("installed {}", installed.join(", ")));
    }

    ports
        .console
        .step(format!("Checking Python {}", profile.python.full));
    let interpreter = ensure_interpreter(ports.runtime, ports.prompt, &profile.python)?;

    tracing::info!(project = %layout.project_dir.display(), "working directory");
    let recreated = clear_existing_env(ports, &layout.env_dir)?;

    ports.console.step(format!(
        "Creating isolated environment at {}",
        layout.env_dir.display()
    ));
    let venv = VirtualEnv::create(ports.runner, &interpreter.path, &layout.env_dir)?;

    if !ports.fs.is_file(&layout.manifest) {
        return Err(OpsError::MissingResource {
            what: "dependency manifest",
            path: layout.manifest.clone(),
        });
    }
    let digest = manifest_digest(&ports.fs.read(&layout.manifest)?);

    ports.console.step("Installing Python dependencies");
    venv.pip_install_manifest(ports.runner, &layout.manifest, &layout.project_dir)?;

    let interpreter_label = interpreter.path.to_string_lossy().to_string();
    write_stamp(
        ports.fs,
        &layout.stamp_path(),
        &SetupStamp {
            python_version: profile.python.full.clone(),
            interpreter: interpreter_label.clone(),
            manifest_sha256: digest.clone(),
            packages: profile.packages.len(),
            created_at: unix_now(),
        },
    )?;

    ports.console.ok("setup complete");
    Ok(SetupReport {
        python_version: profile.python.full.clone(),
        interpreter: interpreter_label,
        installed_packages: installed,
        remediated: interpreter.remediated,
        recreated_environment: recreated,
        environment: venv.root().to_string_lossy().to_string(),
        manifest_sha256: digest,
    })
}

/// An existing environment is only replaced with the operator's consent.
fn clear_existing_env(ports: &Ports, env_dir: &Path) -> Result<bool, OpsError> {
    if !ports.fs.is_dir(env_dir) {
        return Ok(false);
    }
    let question = format!(
        "An environment already exists at {}. Delete it and create a new one?",
        env_dir.display()
    );
    if !ports.prompt.confirm(&question)? {
        return Err(OpsError::Declined(format!(
            "refusing to overwrite the existing environment at {}",
            env_dir.display()
        )));
    }
    ports.console.warn(format!("removing {}", env_dir.display()));
    ports.fs.remove_dir_all(env_dir)?;
    Ok(true)
}
