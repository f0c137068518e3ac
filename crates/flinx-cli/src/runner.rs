// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Execution of external programs (`sphinx-build`, `sphinx-autobuild`, the
//! browser opener).
//!
//! Commands go through the [`ProcessRunner`] trait so the command layer can be
//! exercised without Sphinx installed.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Errors from running an external program.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The program is not on `PATH`.
    #[error("{program} not found; install it with `pip install {package}`")]
    NotFound {
        /// Program name.
        program: String,
        /// Python package providing it.
        package: String,
    },

    /// The program could not be started.
    #[error("Failed to run {program}: {source}")]
    Spawn {
        /// Program name.
        program: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The program exited unsuccessfully.
    #[error("{program} failed ({})", describe_code(*code))]
    Failed {
        /// Program name.
        program: String,
        /// Exit code, `None` if terminated by a signal.
        code: Option<i32>,
    },
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Convenience type alias for runner results.
pub type RunnerResult<T> = Result<T, RunnerError>;

/// A program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    /// Program name or path.
    pub program: String,
    /// Arguments, in order.
    pub args: Vec<String>,
    /// Working directory.
    pub cwd: PathBuf,
}

impl ToolCommand {
    /// Creates a command running `program` in `cwd`.
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    /// Appends arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The command line as a single string, for logging.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How a finished program exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus {
    /// Exit code, `None` if terminated by a signal.
    pub code: Option<i32>,
}

impl ProcessStatus {
    /// Status of a successful run.
    pub const SUCCESS: Self = Self { code: Some(0) };

    /// Returns true if the program exited with code 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external programs.
pub trait ProcessRunner {
    /// Runs `command`, blocking until it exits.
    fn run(&mut self, command: &ToolCommand) -> RunnerResult<ProcessStatus>;

    /// Starts `command` in the background without waiting for it.
    fn spawn(&mut self, command: &ToolCommand) -> RunnerResult<()>;
}

/// Runs `command` and turns a non-zero exit into [`RunnerError::Failed`].
pub fn run_checked(runner: &mut dyn ProcessRunner, command: &ToolCommand) -> RunnerResult<()> {
    tracing::debug!("Running {} in {}", command.display(), command.cwd.display());
    let status = runner.run(command)?;
    if status.success() {
        Ok(())
    } else {
        Err(RunnerError::Failed {
            program: command.program.clone(),
            code: status.code,
        })
    }
}

/// Runs programs with [`std::process::Command`], sharing the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&mut self, command: &ToolCommand) -> RunnerResult<ProcessStatus> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| launch_error(command, source))?;
        Ok(ProcessStatus {
            code: status.code(),
        })
    }

    fn spawn(&mut self, command: &ToolCommand) -> RunnerResult<()> {
        tracing::debug!("Spawning {} in {}", command.display(), command.cwd.display());
        // The child is detached; its exit status is never collected.
        Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| launch_error(command, source))?;
        Ok(())
    }
}

fn launch_error(command: &ToolCommand, source: std::io::Error) -> RunnerError {
    if source.kind() == ErrorKind::NotFound {
        RunnerError::NotFound {
            program: command.program.clone(),
            package: package_for(&command.program).to_string(),
        }
    } else {
        RunnerError::Spawn {
            program: command.program.clone(),
            source,
        }
    }
}

/// Python package that provides a program.
fn package_for(program: &str) -> &str {
    match program {
        "sphinx-build" => "sphinx",
        other => other,
    }
}
