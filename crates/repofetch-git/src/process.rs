//! Subprocess execution.
//!
//! Every external command goes through the [`CommandRunner`] trait so the
//! clone logic can be exercised without a real VCS binary. [`SystemRunner`]
//! is the implementation backed by [`std::process::Command`].

use std::fmt;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use repofetch_core::CommandFailure;

use crate::vcs::is_vcs_installed;

/// A single external command: program, arguments, working directory and
/// extra environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute.
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Working directory.
    pub cwd: PathBuf,
    /// Environment variables added to the inherited environment.
    pub envs: Vec<(String, String)>,
}

impl Invocation {
    /// Creates a new invocation.
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.into(),
            envs: Vec::new(),
        }
    }

    /// Adds an environment variable.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Returns the subcommand (first argument), if any.
    pub fn subcommand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of a completed subprocess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal.
    pub status: Option<i32>,
    /// Whether the process exited successfully.
    pub success: bool,
    /// stdout and stderr, interleaved in the order they were written.
    pub output: String,
}

impl CommandOutput {
    /// Creates a successful output.
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            success: true,
            output: output.into(),
        }
    }

    /// Creates a failed output with the given exit code.
    pub fn failure(code: i32, output: impl Into<String>) -> Self {
        Self {
            status: Some(code),
            success: false,
            output: output.into(),
        }
    }

    /// Converts into a [`CommandFailure`] describing `invocation`.
    pub fn into_failure(self, invocation: &Invocation) -> CommandFailure {
        CommandFailure {
            program: invocation.program.clone(),
            args: invocation.args.clone(),
            cwd: invocation.cwd.clone(),
            status: self.status,
            output: self.output,
        }
    }
}

/// Executes external commands.
pub trait CommandRunner {
    /// Returns true if `program` can be executed.
    fn is_installed(&self, program: &str) -> bool;

    /// Runs `invocation` to completion, capturing combined output.
    ///
    /// An `Err` means the process could not be started or its output could
    /// not be read; a process that ran and failed comes back as `Ok` with
    /// `success` set to false.
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput>;
}

/// Runs commands as real child processes.
///
/// stdin is closed; stdout and stderr share a single pipe. The call blocks
/// until the child exits. No timeout is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn is_installed(&self, program: &str) -> bool {
        is_vcs_installed(program)
    }

    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        let (mut reader, writer) = io::pipe()?;

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .envs(invocation.envs.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer);

        let mut child = command.spawn()?;
        // The command still holds the write end; it must be closed before
        // reading or read_to_end never sees EOF.
        drop(command);

        let mut raw = Vec::new();
        let read = reader.read_to_end(&mut raw);
        let status = child.wait()?;
        read?;

        Ok(CommandOutput {
            status: status.code(),
            success: status.success(),
            output: String::from_utf8_lossy(&raw).into_owned(),
        })
    }
}
