use crate::services::fs::Filesystem;
use crate::services::output::Console;
use crate::services::packages::PackageManager;
use crate::services::process::Runner;
use crate::services::prompt::Prompter;
use crate::services::runtime::RuntimeProvider;

/// Every host-facing capability a procedure may touch. Commands wire the real
/// implementations; tests wire fakes.
pub struct Ports<'a> {
    pub packages: &'a dyn PackageManager,
    pub runtime: &'a dyn RuntimeProvider,
    pub fs: &'a dyn Filesystem,
    pub prompt: &'a dyn Prompter,
    pub runner: &'a dyn Runner,
    pub console: Console,
}
