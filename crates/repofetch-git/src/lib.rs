//! # repofetch Git
//!
//! Clones remote repositories into a caller-owned temporary directory using
//! the system `git` binary.
//!
//! ## Features
//!
//! - Git operations via system `git` CLI, stdout and stderr captured together
//! - Optional checkout of a branch, tag or commit after cloning
//! - Failure output classified into typed [`FetchError`] variants
//! - Pluggable [`CommandRunner`] for running without a real git
//!
//! ## Example
//!
//! ```no_run
//! use repofetch_git::{CloneOptions, GitCloner, RepoUrl, Revision};
//!
//! let tmp = tempfile::tempdir()?;
//! let cloner = GitCloner::new(CloneOptions::default());
//!
//! let path = cloner.clone_repo(
//!     &RepoUrl::new("git@example.com:foo/bar.git"),
//!     &tmp,
//!     Some(&Revision::new("v1.0")),
//! )?;
//! assert_eq!(path, tmp.path().join("bar"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod process;
pub mod repository;
pub mod vcs;

// Re-exports
pub use process::{CommandOutput, CommandRunner, Invocation, SystemRunner};
pub use repository::{CloneOptions, CloneOptionsBuilder, GitCloner, classify_failure, clone_repo};
pub use vcs::is_vcs_installed;

pub use repofetch_core::{CloneRequest, CommandFailure, FetchError, RepoUrl, Result, Revision};

// Re-export repofetch_core for consumers
pub use repofetch_core;
