//! repofetch CLI - clone a repository into a fresh temporary directory
//!
//! This crate wires the `repofetch-git` clone operation to layered
//! settings and a command-line front end.

pub mod app;
pub mod error;
pub mod settings;

pub use app::{CloneOutcome, fetch};
pub use error::CliError;
pub use settings::Settings;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
