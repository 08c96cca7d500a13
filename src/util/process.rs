//! Subprocess execution utilities.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use super::errors::{ClwrapError, Result};
use super::fs::native_path;

/// Builder for subprocess execution.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    /// Pass `args` to the child untouched (Windows only); they are already
    /// quoted for the target's command-line parser.
    verbatim: bool,
    env: Vec<(OsString, OsString)>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            verbatim: false,
            env: Vec::new(),
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Treat every argument as pre-quoted command-line text.
    pub fn verbatim(mut self, verbatim: bool) -> Self {
        self.verbatim = verbatim;
        self
    }

    /// Set an environment variable for the child only.
    pub fn env(mut self, key: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> Self {
        self.env
            .push((key.as_ref().to_os_string(), value.as_ref().to_os_string()));
        self
    }

    /// Put `dir` in front of the child's `PATH`; this process's own
    /// environment is left alone.
    pub fn prepend_path(self, dir: &str) -> Result<Self> {
        let mut paths = vec![native_path(dir)];
        if let Some(current) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&current));
        }

        let joined = std::env::join_paths(paths).map_err(|e| ClwrapError::Io {
            path: dir.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
        })?;

        Ok(self.env("PATH", joined))
    }

    /// Get the arguments.
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Build the Command.
    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);

        if self.verbatim {
            push_raw_args(&mut cmd, &self.args);
        } else {
            cmd.args(&self.args);
        }

        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the command with captured output and wait for completion.
    pub fn exec(&self) -> Result<Output> {
        let mut cmd = self.build_command();
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        cmd.output().map_err(|e| self.launch_error(e))
    }

    /// Run with inherited standard streams and return the child's exit code.
    ///
    /// A nonzero exit code is not an error. A child killed by a signal
    /// reports 1.
    pub fn launch(&self) -> Result<i32> {
        let mut cmd = self.build_command();
        tracing::debug!("launching: {}", self.display_command());

        let status = cmd.status().map_err(|e| self.launch_error(e))?;

        Ok(status.code().unwrap_or_else(|| {
            tracing::warn!("`{}` terminated without an exit code", self.program.display());
            1
        }))
    }

    fn launch_error(&self, source: std::io::Error) -> ClwrapError {
        ClwrapError::ExternalToolFailure {
            program: self.program.display().to_string(),
            source,
        }
    }

    /// Display the command for error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

#[cfg(windows)]
fn push_raw_args(cmd: &mut Command, args: &[String]) {
    use std::os::windows::process::CommandExt;
    for arg in args {
        cmd.raw_arg(arg);
    }
}

#[cfg(not(windows))]
fn push_raw_args(cmd: &mut Command, args: &[String]) {
    cmd.args(args);
}
