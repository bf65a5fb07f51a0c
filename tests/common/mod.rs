#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

pub const DEBIAN: &str = "ID=debian\nPRETTY_NAME=\"Debian GNU/Linux 12 (bookworm)\"\n";
pub const FEDORA: &str = "NAME=\"Fedora Linux\"\nID=fedora\nPRETTY_NAME=\"Fedora Linux 40\"\n";

/// Effective uid of the test process, from `/proc/self/status`.
pub fn is_root() -> bool {
    fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|s| {
            s.lines()
                .find_map(|l| l.strip_prefix("Uid:"))
                .and_then(|rest| rest.split_whitespace().nth(1))
                .map(|uid| uid == "0")
        })
        .unwrap_or(false)
}

/// A throwaway project directory plus a separate working directory the binary
/// is launched from.
pub struct TestEnv {
    _tmp: TempDir,
    pub project: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let project = tmp.path().join("project");
        let work = tmp.path().join("work");
        fs::create_dir_all(project.join("app")).expect("create app dir");
        fs::create_dir_all(&work).expect("create work dir");
        fs::write(project.join("requirements.txt"), "paddleocr==2.7.0\n")
            .expect("write manifest");
        fs::write(project.join("app/main.py"), "import sys\n").expect("write ocr entry");
        fs::write(project.join("app/dashboard.py"), "import sys\n")
            .expect("write dashboard entry");
        Self {
            _tmp: tmp,
            project,
            work,
        }
    }

    /// Point the os-release check at a fixture so results do not depend on
    /// the machine running the tests.
    pub fn with_os_release(self, contents: &str) -> Self {
        let path = self.project.join("os-release");
        fs::write(&path, contents).expect("write os-release fixture");
        self.write_config(&format!(
            "[host]\nos_release = \"{}\"\n",
            path.to_str().expect("utf8 path")
        ));
        self
    }

    pub fn write_config(&self, body: &str) {
        fs::write(self.project.join("ocrkit.toml"), body).expect("write config");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("ocrkit");
        cmd.env("OCRKIT_PROJECT_DIR", &self.project)
            .env_remove("OCRKIT_LOG")
            .current_dir(&self.work);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .code(1)
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }

    /// Stand in for `setup`: an `env/bin/python` that prints one line and exits.
    pub fn with_fake_environment(self, stdout_line: &str) -> Self {
        let bin = self.project.join("env/bin");
        fs::create_dir_all(&bin).expect("create env/bin");
        let python = bin.join("python");
        fs::write(&python, format!("#!/bin/sh\necho '{}'\n", stdout_line))
            .expect("write fake python");
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).expect("chmod fake python");
        self
    }
}
