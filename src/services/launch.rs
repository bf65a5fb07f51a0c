use crate::domain::errors::OpsError;
use crate::domain::models::{DashboardReport, Profile, RunReport};
use crate::services::ports::Ports;
use crate::services::venv::VirtualEnv;
use std::path::Path;

fn require_entry(ports: &Ports, entry: &Path) -> Result<(), OpsError> {
    if ports.fs.is_file(entry) {
        Ok(())
    } else {
        Err(OpsError::MissingResource {
            what: "entry point",
            path: entry.to_path_buf(),
        })
    }
}

/// `run <directory>`. Check order: environment, argument, input, entry point.
/// The output directory is only created once every check has passed.
pub fn run_ocr(
    ports: &Ports,
    profile: &Profile,
    input: Option<&Path>,
) -> Result<RunReport, OpsError> {
    let layout = &profile.layout;
    if !ports.fs.is_dir(&layout.env_dir) {
        return Err(OpsError::EnvironmentMissing(layout.env_dir.clone()));
    }
    let input = input.ok_or_else(|| {
        OpsError::Usage("missing input directory (usage: ocrkit run <directory>)".to_string())
    })?;
    if !ports.fs.is_dir(input) {
        return Err(OpsError::MissingResource {
            what: "input directory",
            path: input.to_path_buf(),
        });
    }
    require_entry(ports, &layout.ocr_entry)?;

    let output = &layout.output_dir;
    let created_output = !ports.fs.is_dir(output);
    if created_output {
        ports.fs.create_dir_all(output)?;
    }

    let venv = VirtualEnv::at(&layout.env_dir);
    ports.console.step(format!(
        "Running OCR over {} into {}",
        input.display(),
        output.display()
    ));
    ports.runner.run(
        &venv
            .python_command()
            .arg(&layout.ocr_entry)
            .arg(input)
            .arg(output),
    )?;
    ports
        .console
        .ok(format!("OCR finished; results are in {}", output.display()));

    Ok(RunReport {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        created_output,
        entry: layout.ocr_entry.to_string_lossy().to_string(),
    })
}

/// `dashboard`: foreground launch over the output directory.
pub fn launch_dashboard(ports: &Ports, profile: &Profile) -> Result<DashboardReport, OpsError> {
    let layout = &profile.layout;
    let output = &layout.output_dir;
    if !ports.fs.is_dir(output) {
        return Err(OpsError::OutputMissing(output.clone()));
    }
    require_entry(ports, &layout.dashboard_entry)?;

    let venv = VirtualEnv::at(&layout.env_dir);
    ports
        .console
        .step(format!("Starting dashboard for {}", output.display()));
    ports.runner.run(
        &venv
            .python_command()
            .arg(&layout.dashboard_entry)
            .arg(output),
    )?;

    Ok(DashboardReport {
        output: output.to_string_lossy().to_string(),
        entry: layout.dashboard_entry.to_string_lossy().to_string(),
    })
}
