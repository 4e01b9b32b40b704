//! Error types for repofetch.
//!
//! The taxonomy is closed: a missing VCS binary, a repository that does not
//! exist, a revision that cannot be checked out, or the raw subprocess
//! failure when the output matches none of the known patterns.
//!
//! Classified variants keep the raw [`CommandFailure`] as their
//! [`source`](std::error::Error::source), so the full tool output is never
//! lost.
//!
//! # Example
//!
//! ```
//! use repofetch_core::{FetchError, Result};
//!
//! fn require_git(found: bool) -> Result<()> {
//!     if !found {
//!         return Err(FetchError::vcs_not_installed("git"));
//!     }
//!     Ok(())
//! }
//!
//! let err = require_git(false).unwrap_err();
//! assert_eq!(err.to_string(), "Git is not installed.");
//! assert!(err.is_classified());
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A subprocess that ran to completion but reported failure.
///
/// This is the low-level failure as the tool reported it: the command line,
/// the directory it ran in, its exit code and its captured output (stdout
/// and stderr interleaved).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("command '{}' {}", join_command(.program, .args), describe_exit(.status))]
pub struct CommandFailure {
    /// Program that was executed.
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Working directory of the process.
    pub cwd: PathBuf,
    /// Exit code, `None` when the process was terminated by a signal.
    pub status: Option<i32>,
    /// Combined stdout/stderr text.
    pub output: String,
}

impl CommandFailure {
    /// Returns the command line as a single string.
    pub fn command_line(&self) -> String {
        join_command(&self.program, &self.args)
    }
}

fn join_command(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

fn describe_exit(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("returned non-zero exit status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

/// Main error type for repository fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The VCS executable is not on the search path.
    #[error("{} is not installed.", capitalize(.tool))]
    VcsNotInstalled {
        /// Name of the missing executable
        tool: String,
    },

    /// The remote repository does not exist or is not reachable.
    #[error("{message}")]
    RepositoryNotFound {
        /// User-facing description
        message: String,
        /// The failed clone or checkout
        #[source]
        source: CommandFailure,
    },

    /// The requested revision could not be checked out.
    #[error("{message}")]
    RepositoryCloneFailed {
        /// User-facing description
        message: String,
        /// The failed clone or checkout
        #[source]
        source: CommandFailure,
    },

    /// A subprocess failed with output matching no known pattern.
    #[error(transparent)]
    Command(#[from] CommandFailure),

    /// The subprocess could not be spawned or its output could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl FetchError {
    // ============================================
    // Convenience constructors
    // ============================================

    /// Creates a VcsNotInstalled error.
    pub fn vcs_not_installed(tool: impl Into<String>) -> Self {
        Self::VcsNotInstalled { tool: tool.into() }
    }

    /// Creates a RepositoryNotFound error for `url`.
    pub fn repository_not_found(url: impl fmt::Display, source: CommandFailure) -> Self {
        Self::RepositoryNotFound {
            message: format!("The repository {url} could not be found, have you made a typo?"),
            source,
        }
    }

    /// Creates a RepositoryCloneFailed error for `revision` of `url`.
    ///
    /// A missing revision is rendered as `None`.
    pub fn repository_clone_failed(
        url: impl fmt::Display,
        revision: Option<&str>,
        source: CommandFailure,
    ) -> Self {
        let revision = revision.unwrap_or("None");
        Self::RepositoryCloneFailed {
            message: format!(
                "The {revision} branch of repository {url} could not found, have you made a typo?"
            ),
            source,
        }
    }

    // ============================================
    // Query methods
    // ============================================

    /// Returns true for the domain-specific variants.
    ///
    /// Raw subprocess and I/O failures return false.
    pub fn is_classified(&self) -> bool {
        matches!(
            self,
            Self::VcsNotInstalled { .. }
                | Self::RepositoryNotFound { .. }
                | Self::RepositoryCloneFailed { .. }
        )
    }

    /// Returns true if the VCS binary is missing.
    pub fn is_vcs_not_installed(&self) -> bool {
        matches!(self, Self::VcsNotInstalled { .. })
    }

    /// Returns true if the repository was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RepositoryNotFound { .. })
    }

    /// Returns true if the requested revision could not be checked out.
    pub fn is_clone_failed(&self) -> bool {
        matches!(self, Self::RepositoryCloneFailed { .. })
    }

    /// Returns the underlying subprocess failure, if any.
    pub fn command_failure(&self) -> Option<&CommandFailure> {
        match self {
            Self::RepositoryNotFound { source, .. } | Self::RepositoryCloneFailed { source, .. } => {
                Some(source)
            },
            Self::Command(failure) => Some(failure),
            Self::VcsNotInstalled { .. } | Self::Io(_) => None,
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Type alias for Results with FetchError.
pub type Result<T> = std::result::Result<T, FetchError>;
