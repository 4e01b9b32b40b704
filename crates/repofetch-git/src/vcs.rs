//! VCS executable discovery.

use std::env;
use std::path::Path;

/// Returns true if an executable named `tool` is resolvable on `PATH`.
///
/// A `tool` containing a path separator is checked directly instead of
/// being searched for.
pub fn is_vcs_installed(tool: &str) -> bool {
    if tool.is_empty() {
        return false;
    }

    if tool.contains(std::path::MAIN_SEPARATOR) || tool.contains('/') {
        return is_executable(Path::new(tool));
    }

    env::var_os("PATH")
        .map(|paths| {
            env::split_paths(&paths).any(|dir| {
                candidate_names(tool).any(|name| is_executable(&dir.join(name)))
            })
        })
        .unwrap_or(false)
}

#[cfg(unix)]
fn candidate_names(tool: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(tool.to_string())
}

#[cfg(windows)]
fn candidate_names(tool: &str) -> impl Iterator<Item = String> + '_ {
    ["", ".exe", ".cmd", ".bat"]
        .into_iter()
        .map(move |ext| format!("{tool}{ext}"))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(windows)]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
