//! Local git repository fixtures.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns true if a usable `git` is on PATH.
pub fn git_available() -> bool {
    repofetch_git::is_vcs_installed("git")
}

fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=repofetch",
            "-c",
            "user.email=repofetch@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(output.status.success(), "git {:?} failed: {:?}", args, output);
}

/// Creates a local repository `dir/name` with one commit tagged `v1.0`.
pub fn init_source_repo(dir: &Path, name: &str) -> PathBuf {
    let repo = dir.join(name);
    std::fs::create_dir_all(&repo).unwrap();

    git(&repo, &["init", "--quiet"]);
    std::fs::write(repo.join("README.md"), "hello\n").unwrap();
    git(&repo, &["add", "README.md"]);
    git(&repo, &["commit", "--quiet", "-m", "initial"]);
    git(&repo, &["tag", "v1.0"]);

    repo
}
