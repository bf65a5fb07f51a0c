use crate::domain::constants::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

fn default_python_version() -> String {
    DEFAULT_PYTHON_VERSION.to_string()
}

fn default_env_dir() -> String {
    DEFAULT_ENV_DIR.to_string()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_manifest() -> String {
    DEFAULT_MANIFEST.to_string()
}

fn default_ocr_entry() -> String {
    DEFAULT_OCR_ENTRY.to_string()
}

fn default_dashboard_entry() -> String {
    DEFAULT_DASHBOARD_ENTRY.to_string()
}

fn default_os_release() -> String {
    DEFAULT_OS_RELEASE.to_string()
}

fn default_packages() -> Vec<String> {
    DEFAULT_PACKAGES.iter().map(|p| p.to_string()).collect()
}

fn default_pyenv_installer() -> String {
    DEFAULT_PYENV_INSTALLER.to_string()
}

/// Contents of `ocrkit.toml`. Every field is optional on disk.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub python: PythonSection,
    #[serde(default)]
    pub paths: PathsSection,
    #[serde(default)]
    pub host: HostSection,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PythonSection {
    #[serde(default = "default_python_version")]
    pub version: String,
}

impl Default for PythonSection {
    fn default() -> Self {
        Self {
            version: default_python_version(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PathsSection {
    #[serde(default = "default_env_dir")]
    pub env_dir: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_manifest")]
    pub manifest: String,
    #[serde(default = "default_ocr_entry")]
    pub ocr_entry: String,
    #[serde(default = "default_dashboard_entry")]
    pub dashboard_entry: String,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            env_dir: default_env_dir(),
            output_dir: default_output_dir(),
            manifest: default_manifest(),
            ocr_entry: default_ocr_entry(),
            dashboard_entry: default_dashboard_entry(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HostSection {
    #[serde(default = "default_os_release")]
    pub os_release: String,
    #[serde(default = "default_packages")]
    pub packages: Vec<String>,
    #[serde(default = "default_pyenv_installer")]
    pub pyenv_installer: String,
}

impl Default for HostSection {
    fn default() -> Self {
        Self {
            os_release: default_os_release(),
            packages: default_packages(),
            pyenv_installer: default_pyenv_installer(),
        }
    }
}

/// Pinned interpreter: `minor` is `major.minor`, `full` is `major.minor.patch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PythonPin {
    pub minor: String,
    pub full: String,
}

impl PythonPin {
    /// Name of the versioned interpreter looked up on `PATH`.
    pub fn binary(&self) -> String {
        format!("python{}", self.minor)
    }
}

/// Resolved locations for one invocation.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub project_dir: PathBuf,
    pub env_dir: PathBuf,
    pub manifest: PathBuf,
    /// Kept as configured: relative values resolve against the caller's cwd.
    pub output_dir: PathBuf,
    pub ocr_entry: PathBuf,
    pub dashboard_entry: PathBuf,
    pub os_release: PathBuf,
}

impl ProjectLayout {
    pub fn stamp_path(&self) -> PathBuf {
        self.env_dir.join(SETUP_STAMP_FILE)
    }
}

/// Everything a procedure needs to know, derived from `Settings`.
#[derive(Debug, Clone)]
pub struct Profile {
    pub layout: ProjectLayout,
    pub python: PythonPin,
    pub packages: Vec<String>,
    pub pyenv_installer: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SetupStamp {
    pub python_version: String,
    pub interpreter: String,
    pub manifest_sha256: String,
    pub packages: usize,
    pub created_at: u64,
}

#[derive(Serialize, Debug)]
pub struct SetupReport {
    pub python_version: String,
    pub interpreter: String,
    pub installed_packages: Vec<String>,
    pub remediated: bool,
    pub recreated_environment: bool,
    pub environment: String,
    pub manifest_sha256: String,
}

#[derive(Serialize, Debug)]
pub struct RunReport {
    pub input: String,
    pub output: String,
    pub created_output: bool,
    pub entry: String,
}

#[derive(Serialize, Debug)]
pub struct DashboardReport {
    pub output: String,
    pub entry: String,
}
