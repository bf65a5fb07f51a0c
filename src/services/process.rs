use crate::domain::errors::OpsError;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A fully described child process: program, argv, environment edits and
/// optional stdin payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub envs: Vec<(OsString, OsString)>,
    pub env_remove: Vec<OsString>,
    pub stdin: Option<Vec<u8>>,
    pub current_dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn env_remove(mut self, key: impl Into<OsString>) -> Self {
        self.env_remove.push(key.into());
        self
    }

    pub fn stdin(mut self, input: Vec<u8>) -> Self {
        self.stdin = Some(input);
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().to_string()
    }

    /// Shell-like rendering for logs and error messages.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program_name()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().to_string()));
        parts.join(" ")
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for key in &self.env_remove {
            cmd.env_remove(key);
        }
        for (k, v) in &self.envs {
            cmd.env(k, v);
        }
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

#[derive(Debug, Clone, Default)]
pub struct Captured {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Port for spawning external programs.
pub trait Runner {
    /// Run with inherited stdout/stderr; a non-zero exit is an error.
    fn run(&self, spec: &CommandSpec) -> Result<(), OpsError>;

    /// Run with captured output; the exit status is reported, not enforced.
    fn capture(&self, spec: &CommandSpec) -> Result<Captured, OpsError>;
}

/// Spawns real processes. With `stdout_to_stderr` set, children write their
/// stdout to our stderr so a `--json` document on stdout stays parseable.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner {
    pub stdout_to_stderr: bool,
}

impl SystemRunner {
    pub fn new(json: bool) -> Self {
        Self {
            stdout_to_stderr: json,
        }
    }
}

impl Runner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<(), OpsError> {
        tracing::debug!(command = %spec.display(), "spawning");
        let mut cmd = spec.to_command();
        if spec.stdin.is_some() {
            cmd.stdin(Stdio::piped());
        }
        if self.stdout_to_stderr {
            cmd.stdout(std::io::stderr());
        }
        let mut child = cmd.spawn().map_err(|source| OpsError::Spawn {
            program: spec.program_name(),
            source,
        })?;
        if let (Some(input), Some(mut pipe)) = (&spec.stdin, child.stdin.take()) {
            if let Err(err) = pipe.write_all(input) {
                drop(pipe);
                let _ = child.kill();
                let _ = child.wait();
                return Err(err.into());
            }
        }
        let status = child.wait()?;
        if !status.success() {
            return Err(OpsError::CommandFailed {
                program: spec.display(),
                status: status.to_string(),
            });
        }
        Ok(())
    }

    fn capture(&self, spec: &CommandSpec) -> Result<Captured, OpsError> {
        tracing::debug!(command = %spec.display(), "probing");
        let output = spec
            .to_command()
            .stdin(Stdio::null())
            .output()
            .map_err(|source| OpsError::Spawn {
                program: spec.program_name(),
                source,
            })?;
        Ok(Captured {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
