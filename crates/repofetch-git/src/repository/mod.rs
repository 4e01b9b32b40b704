//! Git repository cloning.
//!
//! This module provides the clone-and-checkout operation and the
//! classification of git failures into typed errors.

mod classify;
mod config;
mod git_ops;

pub use classify::{BRANCH_ERRORS, classify_failure};
pub use config::{CloneOptions, CloneOptionsBuilder};
pub use git_ops::{GitCloner, clone_repo};
