#![allow(dead_code)]
use std::path::PathBuf;

use repofetch_core::CommandFailure;

/// URL fixtures paired with the directory name `git clone` creates for them.
pub const URL_FIXTURES: &[(&str, &str)] = &[
    ("https://example.com/foo/bar.git", "bar"),
    ("https://example.com/foo/bar.git/", "bar"),
    ("https://example.com/foo/bar", "bar"),
    ("git@example.com:foo/bar.git", "bar"),
    ("git@example.com:bar.git", "bar"),
    ("ssh://git@example.com:2222/foo/bar.git", "bar"),
    ("file:///srv/git/bar.git", "bar"),
    ("../relative/bar.git", "bar"),
];

/// Helper to build a failed `git` invocation with the given output.
pub fn git_failure(args: &[&str], output: &str) -> CommandFailure {
    CommandFailure {
        program: "git".to_string(),
        args: args.iter().map(|a| a.to_string()).collect(),
        cwd: PathBuf::from("/tmp/repofetch-test"),
        status: Some(128),
        output: output.to_string(),
    }
}
