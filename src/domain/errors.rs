use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum OpsError {
    #[error("this command must be run as root (try sudo)")]
    NotElevated,
    #[error("unsupported platform: {0} (a Debian-based distribution is required)")]
    UnsupportedPlatform(String),
    #[error("{0}")]
    Usage(String),
    #[error("isolated environment not found at {}; run `ocrkit setup` first", .0.display())]
    EnvironmentMissing(PathBuf),
    #[error("output directory not found at {}; run `ocrkit run <directory>` first", .0.display())]
    OutputMissing(PathBuf),
    #[error("{0}")]
    Declined(String),
    #[error("{what} not found: {}", .path.display())]
    MissingResource { what: &'static str, path: PathBuf },
    #[error("`{program}` failed ({status})")]
    CommandFailed { program: String, status: String },
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to download {url}: {reason}")]
    Download { url: String, reason: String },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl OpsError {
    pub fn code(&self) -> &'static str {
        match self {
            OpsError::NotElevated => "PRIVILEGE_REQUIRED",
            OpsError::UnsupportedPlatform(_) => "UNSUPPORTED_PLATFORM",
            OpsError::Usage(_) => "USAGE",
            OpsError::EnvironmentMissing(_) => "ENV_MISSING",
            OpsError::OutputMissing(_) => "OUTPUT_MISSING",
            OpsError::Declined(_) => "CONSENT_DECLINED",
            OpsError::MissingResource { .. } => "MISSING_RESOURCE",
            OpsError::CommandFailed { .. } => "COMMAND_FAILED",
            OpsError::Spawn { .. } => "SPAWN_FAILED",
            OpsError::Download { .. } => "DOWNLOAD_FAILED",
            OpsError::Config(_) => "CONFIG",
            OpsError::Io(_) => "IO",
        }
    }
}
