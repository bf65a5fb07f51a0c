use crate::domain::errors::OpsError;
use crate::domain::models::PythonPin;
use crate::services::process::{CommandSpec, Runner};
use crate::services::prompt::Prompter;
use std::path::PathBuf;
use std::time::Duration;

/// Port over "which interpreter versions exist and how to get the pinned one".
pub trait RuntimeProvider {
    /// Version reported by `<binary> --version`, `None` when the binary is absent.
    fn reported_version(&self, binary: &str) -> Result<Option<String>, OpsError>;
    fn manager_present(&self) -> bool;
    fn bootstrap_manager(&self) -> Result<(), OpsError>;
    /// Install `pin.full` and return the path of its versioned interpreter.
    fn install_version(&self, pin: &PythonPin) -> Result<PathBuf, OpsError>;
    fn set_default(&self, version: &str) -> Result<(), OpsError>;
}

pub struct Pyenv<'a> {
    runner: &'a dyn Runner,
    root: PathBuf,
    installer_url: String,
}

impl<'a> Pyenv<'a> {
    pub fn new(runner: &'a dyn Runner, installer_url: impl Into<String>) -> Self {
        Self {
            runner,
            root: pyenv_root(),
            installer_url: installer_url.into(),
        }
    }

    fn executable(&self) -> PathBuf {
        let local = self.root.join("bin").join("pyenv");
        if local.is_file() {
            local
        } else {
            PathBuf::from("pyenv")
        }
    }

    fn pyenv(&self) -> CommandSpec {
        CommandSpec::new(self.executable()).env("PYENV_ROOT", &self.root)
    }

    fn fetch_installer(&self) -> Result<Vec<u8>, OpsError> {
        let fail = |reason: String| OpsError::Download {
            url: self.installer_url.clone(),
            reason,
        };
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| fail(e.to_string()))?;
        let resp = client
            .get(&self.installer_url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| fail(e.to_string()))?;
        let body = resp.bytes().map_err(|e| fail(e.to_string()))?;
        Ok(body.to_vec())
    }
}

pub fn pyenv_root() -> PathBuf {
    if let Ok(root) = std::env::var("PYENV_ROOT") {
        if !root.is_empty() {
            return PathBuf::from(root);
        }
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/root".to_string());
    PathBuf::from(home).join(".pyenv")
}

impl RuntimeProvider for Pyenv<'_> {
    fn reported_version(&self, binary: &str) -> Result<Option<String>, OpsError> {
        let out = match self
            .runner
            .capture(&CommandSpec::new(binary).arg("--version"))
        {
            Ok(out) => out,
            Err(OpsError::Spawn { source, .. }) => {
                tracing::debug!(binary, error = %source, "interpreter not found");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        if !out.success {
            return Ok(None);
        }
        // Python 2 and early 3.x print the banner on stderr.
        Ok(parse_python_version(&out.stdout).or_else(|| parse_python_version(&out.stderr)))
    }

    fn manager_present(&self) -> bool {
        if self.root.join("bin").join("pyenv").is_file() {
            return true;
        }
        self.runner
            .capture(&CommandSpec::new("pyenv").arg("--version"))
            .map(|o| o.success)
            .unwrap_or(false)
    }

    fn bootstrap_manager(&self) -> Result<(), OpsError> {
        tracing::info!(url = %self.installer_url, "bootstrapping pyenv");
        let script = self.fetch_installer()?;
        self.runner.run(
            &CommandSpec::new("bash")
                .env("PYENV_ROOT", &self.root)
                .stdin(script),
        )
    }

    fn install_version(&self, pin: &PythonPin) -> Result<PathBuf, OpsError> {
        self.runner
            .run(&self.pyenv().args(["install", "-s"]).arg(&pin.full))?;
        Ok(self
            .root
            .join("versions")
            .join(&pin.full)
            .join("bin")
            .join(pin.binary()))
    }

    fn set_default(&self, version: &str) -> Result<(), OpsError> {
        self.runner.run(&self.pyenv().arg("global").arg(version))
    }
}

/// Extracts `3.10.12` from a `Python 3.10.12` banner.
pub fn parse_python_version(banner: &str) -> Option<String> {
    banner
        .lines()
        .find_map(|line| line.trim().strip_prefix("Python "))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// The interpreter `setup` will build the environment from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    pub path: PathBuf,
    pub remediated: bool,
}

/// Accept the versioned interpreter on `PATH` when it matches the pin exactly,
/// otherwise ask before installing the pin through pyenv.
pub fn ensure_interpreter(
    runtime: &dyn RuntimeProvider,
    prompt: &dyn Prompter,
    pin: &PythonPin,
) -> Result<Interpreter, OpsError> {
    let binary = pin.binary();
    let question = match runtime.reported_version(&binary)? {
        Some(found) if found == pin.full => {
            tracing::info!(version = %found, "pinned interpreter present");
            return Ok(Interpreter {
                path: PathBuf::from(binary),
                remediated: false,
            });
        }
        Some(found) => format!(
            "{} reports version {}, but {} is required. Install Python {} with pyenv?",
            binary, found, pin.full, pin.full
        ),
        None => format!(
            "{} was not found. Install Python {} with pyenv?",
            binary, pin.full
        ),
    };

    if !prompt.confirm(&question)? {
        return Err(OpsError::Declined(format!(
            "Python {} is required; aborting setup",
            pin.full
        )));
    }

    if !runtime.manager_present() {
        runtime.bootstrap_manager()?;
    }
    let path = runtime.install_version(pin)?;
    runtime.set_default(&pin.full)?;
    Ok(Interpreter {
        path,
        remediated: true,
    })
}
