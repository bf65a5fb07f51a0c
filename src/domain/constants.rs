pub const DEFAULT_PYTHON_VERSION: &str = "3.10.12";

pub const DEFAULT_ENV_DIR: &str = "env";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_MANIFEST: &str = "requirements.txt";
pub const DEFAULT_OCR_ENTRY: &str = "app/main.py";
pub const DEFAULT_DASHBOARD_ENTRY: &str = "app/dashboard.py";

pub const DEFAULT_OS_RELEASE: &str = "/etc/os-release";
pub const DEFAULT_PYENV_INSTALLER: &str = "https://pyenv.run";

pub const CONFIG_FILE_NAME: &str = "ocrkit.toml";
pub const SETUP_STAMP_FILE: &str = ".ocrkit-setup.json";

/// Build dependencies for compiling CPython through pyenv, plus git for
/// pyenv's own bootstrap.
pub const DEFAULT_PACKAGES: &[&str] = &[
    "build-essential",
    "libssl-dev",
    "zlib1g-dev",
    "libbz2-dev",
    "libreadline-dev",
    "libsqlite3-dev",
    "libncursesw5-dev",
    "xz-utils",
    "tk-dev",
    "libxml2-dev",
    "libxmlsec1-dev",
    "libffi-dev",
    "liblzma-dev",
    "wget",
    "curl",
    "llvm",
    "git",
];
