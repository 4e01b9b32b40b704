//! Test helpers for repofetch-cli.

#![allow(dead_code, unused_imports)]

pub mod repo;

pub use repo::{git_available, init_source_repo};

use std::path::Path;
use std::process::{Command, Output};

/// Runs the `repofetch` binary in `cwd` with the given arguments and
/// environment, with any inherited `REPOFETCH_*` settings cleared.
pub fn run_bin(cwd: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_repofetch"));
    command.args(args).current_dir(cwd);

    for (key, _) in std::env::vars() {
        if key.starts_with("REPOFETCH_") {
            command.env_remove(key);
        }
    }
    command.envs(envs.iter().copied());

    command.output().expect("failed to run repofetch binary")
}
