use crate::domain::constants::CONFIG_FILE_NAME;
use crate::domain::errors::OpsError;
use crate::domain::models::{Profile, ProjectLayout, PythonPin, Settings};
use std::path::{Path, PathBuf};

/// `--project-dir` / `OCRKIT_PROJECT_DIR` when given, otherwise the directory
/// holding the `ocrkit` executable.
pub fn resolve_project_dir(explicit: Option<&Path>) -> Result<PathBuf, OpsError> {
    let dir = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let exe = std::env::current_exe()?;
            exe.parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| OpsError::Config("cannot locate executable directory".into()))?
        }
    };
    if dir.is_absolute() {
        Ok(dir)
    } else {
        Ok(std::env::current_dir()?.join(dir))
    }
}

pub fn load_settings(project_dir: &Path) -> Result<Settings, OpsError> {
    let path = project_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    let settings: Settings = toml::from_str(&raw)
        .map_err(|e| OpsError::Config(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(settings)
}

pub fn parse_pin(version: &str) -> Result<PythonPin, OpsError> {
    let parts: Vec<&str> = version.trim().split('.').collect();
    let well_formed = parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
    if !well_formed {
        return Err(OpsError::Config(format!(
            "python.version must look like 3.10.12, got {:?}",
            version
        )));
    }
    Ok(PythonPin {
        minor: format!("{}.{}", parts[0], parts[1]),
        full: parts.join("."),
    })
}

fn non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str, OpsError> {
    if value.trim().is_empty() {
        return Err(OpsError::Config(format!("{} must not be empty", field)));
    }
    Ok(value)
}

pub fn build_profile(settings: &Settings, project_dir: &Path) -> Result<Profile, OpsError> {
    let python = parse_pin(&settings.python.version)?;
    let paths = &settings.paths;
    let layout = ProjectLayout {
        project_dir: project_dir.to_path_buf(),
        env_dir: project_dir.join(non_empty("paths.env_dir", &paths.env_dir)?),
        manifest: project_dir.join(non_empty("paths.manifest", &paths.manifest)?),
        output_dir: PathBuf::from(non_empty("paths.output_dir", &paths.output_dir)?),
        ocr_entry: project_dir.join(non_empty("paths.ocr_entry", &paths.ocr_entry)?),
        dashboard_entry: project_dir
            .join(non_empty("paths.dashboard_entry", &paths.dashboard_entry)?),
        os_release: PathBuf::from(non_empty("host.os_release", &settings.host.os_release)?),
    };
    if settings.host.packages.is_empty() {
        return Err(OpsError::Config("host.packages must not be empty".into()));
    }
    Ok(Profile {
        layout,
        python,
        packages: settings.host.packages.clone(),
        pyenv_installer: non_empty("host.pyenv_installer", &settings.host.pyenv_installer)?
            .to_string(),
    })
}

pub fn load_profile(project_dir: &Path) -> Result<Profile, OpsError> {
    let settings = load_settings(project_dir)?;
    build_profile(&settings, project_dir)
}
