//! repofetch Core - Domain types and errors
//!
//! This crate provides the foundational types shared by the repofetch
//! crates: repository URLs and revisions, path normalization and the
//! closed error taxonomy for clone operations.

pub mod error;
pub mod types;

pub use error::{CommandFailure, FetchError, Result};
pub use types::{CloneRequest, RepoUrl, Revision, normalize_path};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
