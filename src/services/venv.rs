use crate::domain::errors::OpsError;
use crate::services::process::{CommandSpec, Runner};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A Python virtual environment. "Activating" it means every command built
/// through [`VirtualEnv::command`] sees the same variables `bin/activate` sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEnv {
    root: PathBuf,
}

impl VirtualEnv {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn create(
        runner: &dyn Runner,
        interpreter: &Path,
        root: impl Into<PathBuf>,
    ) -> Result<Self, OpsError> {
        let venv = Self::at(root);
        runner.run(
            &CommandSpec::new(interpreter)
                .args(["-m", "venv"])
                .arg(&venv.root),
        )?;
        Ok(venv)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    pub fn python(&self) -> PathBuf {
        self.bin_dir().join("python")
    }

    fn activated_path(&self) -> OsString {
        let mut entries = vec![self.bin_dir()];
        if let Some(existing) = std::env::var_os("PATH") {
            entries.extend(std::env::split_paths(&existing));
        }
        std::env::join_paths(entries).unwrap_or_else(|_| self.bin_dir().into_os_string())
    }

    pub fn command(&self, program: impl Into<OsString>) -> CommandSpec {
        CommandSpec::new(program)
            .env("VIRTUAL_ENV", &self.root)
            .env("PATH", self.activated_path())
            .env_remove("PYTHONHOME")
    }

    pub fn python_command(&self) -> CommandSpec {
        self.command(self.python())
    }

    /// Upgrade pip, then install every requirement. Runs from `workdir` so
    /// relative entries in the manifest resolve against the project.
    pub fn pip_install_manifest(
        &self,
        runner: &dyn Runner,
        manifest: &Path,
        workdir: &Path,
    ) -> Result<(), OpsError> {
        runner.run(
            &self
                .python_command()
                .args(["-m", "pip", "install", "--upgrade", "pip"])
                .current_dir(workdir),
        )?;
        runner.run(
            &self
                .python_command()
                .args(["-m", "pip", "install", "-r"])
                .arg(manifest)
                .current_dir(workdir),
        )
    }
}
