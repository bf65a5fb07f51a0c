//! In-memory stand-ins for the host ports, shared by the unit tests.

use crate::domain::errors::OpsError;
use crate::domain::models::{Profile, PythonPin, Settings};
use crate::services::config::build_profile;
use crate::services::fs::Filesystem;
use crate::services::packages::PackageManager;
use crate::services::process::{Captured, CommandSpec, Runner};
use crate::services::prompt::Prompter;
use crate::services::runtime::RuntimeProvider;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

pub fn pin() -> PythonPin {
    PythonPin {
        minor: "3.10".to_string(),
        full: "3.10.12".to_string(),
    }
}

pub fn fixture_profile(project: &str) -> Profile {
    build_profile(&Settings::default(), Path::new(project)).expect("default profile")
}

#[derive(Default)]
pub struct FakePackages {
    installed: RefCell<HashSet<String>>,
    install_calls: RefCell<Vec<String>>,
    refreshes: Cell<usize>,
}

impl FakePackages {
    pub fn with_installed(names: &[&str]) -> Self {
        let pm = Self::default();
        pm.installed
            .borrow_mut()
            .extend(names.iter().map(|n| n.to_string()));
        pm
    }

    pub fn uninstall(&self, name: &str) {
        self.installed.borrow_mut().remove(name);
    }

    pub fn install_calls(&self) -> Vec<String> {
        self.install_calls.borrow().clone()
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes.get()
    }
}

impl PackageManager for FakePackages {
    fn refresh_index(&self) -> Result<(), OpsError> {
        self.refreshes.set(self.refreshes.get() + 1);
        Ok(())
    }

    fn is_installed(&self, package: &str) -> Result<bool, OpsError> {
        Ok(self.installed.borrow().contains(package))
    }

    fn install(&self, package: &str) -> Result<(), OpsError> {
        self.install_calls.borrow_mut().push(package.to_string());
        self.installed.borrow_mut().insert(package.to_string());
        Ok(())
    }
}

pub struct FakeRuntime {
    version: Option<String>,
    manager: Cell<bool>,
    calls: RefCell<Vec<String>>,
    probed: RefCell<Vec<String>>,
}

impl FakeRuntime {
    pub fn reporting(version: Option<&str>, manager_present: bool) -> Self {
        Self {
            version: version.map(str::to_string),
            manager: Cell::new(manager_present),
            calls: RefCell::new(Vec::new()),
            probed: RefCell::new(Vec::new()),
        }
    }

    /// Mutating calls only: bootstrap/install/global.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.borrow().clone()
    }
}

impl RuntimeProvider for FakeRuntime {
    fn reported_version(&self, binary: &str) -> Result<Option<String>, OpsError> {
        self.probed.borrow_mut().push(binary.to_string());
        Ok(self.version.clone())
    }

    fn manager_present(&self) -> bool {
        self.manager.get()
    }

    fn bootstrap_manager(&self) -> Result<(), OpsError> {
        self.calls.borrow_mut().push("bootstrap".to_string());
        self.manager.set(true);
        Ok(())
    }

    fn install_version(&self, pin: &PythonPin) -> Result<PathBuf, OpsError> {
        self.calls
            .borrow_mut()
            .push(format!("install {}", pin.full));
        Ok(PathBuf::from("/pyenv/versions")
            .join(&pin.full)
            .join("bin")
            .join(pin.binary()))
    }

    fn set_default(&self, version: &str) -> Result<(), OpsError> {
        self.calls.borrow_mut().push(format!("global {}", version));
        Ok(())
    }
}

/// Answers are consumed in order; running out means "no".
#[derive(Default)]
pub struct FakePrompter {
    answers: RefCell<VecDeque<bool>>,
    asked: RefCell<Vec<String>>,
}

impl FakePrompter {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().copied().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for FakePrompter {
    fn confirm(&self, prompt: &str) -> Result<bool, OpsError> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self.answers.borrow_mut().pop_front().unwrap_or(false))
    }
}

#[derive(Default)]
pub struct FakeFs {
    dirs: RefCell<BTreeSet<PathBuf>>,
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
}

impl FakeFs {
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.as_ref().ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, contents: &[u8]) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_vec());
    }

    pub fn remove_file(&self, path: &Path) {
        self.files.borrow_mut().remove(path);
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(path.as_ref())
    }

    pub fn has_file(&self, path: impl AsRef<Path>) -> bool {
        self.files.borrow().contains_key(path.as_ref())
    }
}

impl Filesystem for FakeFs {
    fn is_dir(&self, path: &Path) -> bool {
        self.has_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.has_file(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.add_dir(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        if !self.has_dir(path) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        self.dirs.borrow_mut().retain(|d| !d.starts_with(path));
        self.files.borrow_mut().retain(|f, _| !f.starts_with(path));
        Ok(())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.add_file(path, contents);
        Ok(())
    }
}

/// Records every command; optionally fails those whose rendering contains a
/// marker.
#[derive(Default)]
pub struct FakeRunner {
    calls: RefCell<Vec<CommandSpec>>,
    fail_marker: RefCell<Option<String>>,
}

impl FakeRunner {
    pub fn fail_when_contains(&self, marker: &str) {
        *self.fail_marker.borrow_mut() = Some(marker.to_string());
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    pub fn rendered(&self) -> Vec<String> {
        self.calls.borrow().iter().map(CommandSpec::display).collect()
    }
}

impl Runner for FakeRunner {
    fn run(&self, spec: &CommandSpec) -> Result<(), OpsError> {
        self.calls.borrow_mut().push(spec.clone());
        let failing = self
            .fail_marker
            .borrow()
            .as_deref()
            .is_some_and(|m| spec.display().contains(m));
        if failing {
            return Err(OpsError::CommandFailed {
                program: spec.display(),
                status: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }

    fn capture(&self, spec: &CommandSpec) -> Result<Captured, OpsError> {
        self.calls.borrow_mut().push(spec.clone());
        Ok(Captured {
            success: true,
            ..Captured::default()
        })
    }
}
