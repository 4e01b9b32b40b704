//! Repository clone operations using the system `git` binary.

use std::path::{Path, PathBuf};

use repofetch_core::{CloneRequest, FetchError, RepoUrl, Result, Revision, normalize_path};
use tracing::debug;

use super::CloneOptions;
use super::classify::classify_failure;
use crate::process::{CommandRunner, Invocation, SystemRunner};

/// Clones repositories by shelling out to a VCS binary.
///
/// Each call is a linear sequence: `git clone`, then `git checkout` when a
/// revision is requested. Nothing is retried and nothing is cleaned up on
/// failure; the caller owns the target directory.
#[derive(Debug, Clone)]
pub struct GitCloner<R = SystemRunner> {
    options: CloneOptions,
    runner: R,
}

impl GitCloner<SystemRunner> {
    /// Creates a cloner that spawns real processes.
    pub fn new(options: CloneOptions) -> Self {
        Self::with_runner(options, SystemRunner)
    }
}

impl Default for GitCloner<SystemRunner> {
    fn default() -> Self {
        Self::new(CloneOptions::default())
    }
}

impl<R: CommandRunner> GitCloner<R> {
    /// Creates a cloner using a custom command runner.
    pub fn with_runner(options: CloneOptions, runner: R) -> Self {
        Self { options, runner }
    }

    /// Returns the options.
    pub fn options(&self) -> &CloneOptions {
        &self.options
    }

    /// Returns the command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Clones `url` into `clone_to_dir` and optionally checks out `checkout`.
    ///
    /// Returns the path of the new working copy:
    /// `clone_to_dir/<repo name>`, lexically normalized.
    ///
    /// # Errors
    ///
    /// - [`FetchError::VcsNotInstalled`] before anything runs if the VCS
    ///   binary cannot be found.
    /// - [`FetchError::RepositoryNotFound`] / [`FetchError::RepositoryCloneFailed`]
    ///   when the tool output matches a known pattern.
    /// - [`FetchError::Command`] with the raw failure otherwise.
    /// - [`FetchError::Io`] if a process could not be spawned.
    pub fn clone_repo(
        &self,
        url: &RepoUrl,
        clone_to_dir: impl AsRef<Path>,
        checkout: Option<&Revision>,
    ) -> Result<PathBuf> {
        let program = self.options.program();
        if !self.runner.is_installed(program) {
            return Err(FetchError::vcs_not_installed(program));
        }

        let clone_to_dir = clone_to_dir.as_ref();
        let repo_dir = normalize_path(&clone_to_dir.join(url.repo_name()));
        debug!("Cloning {} into {}", url, repo_dir.display());

        let mut args = vec!["clone".to_string()];
        args.extend(self.options.extra_clone_args().iter().cloned());
        args.push(url.as_str().to_string());
        self.run_checked(url, checkout, self.invocation(args, clone_to_dir))?;

        if let Some(revision) = checkout {
            let args = vec!["checkout".to_string(), revision.as_str().to_string()];
            self.run_checked(url, checkout, self.invocation(args, &repo_dir))?;
        }

        Ok(repo_dir)
    }

    /// Clones the repository described by `request`.
    pub fn clone_request(
        &self,
        request: &CloneRequest,
        clone_to_dir: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        self.clone_repo(&request.url, clone_to_dir, request.checkout.as_ref())
    }

    fn invocation(&self, args: Vec<String>, cwd: &Path) -> Invocation {
        let mut invocation = Invocation::new(self.options.program(), args, cwd);
        invocation.envs = self.options.envs();
        invocation
    }

    fn run_checked(
        &self,
        url: &RepoUrl,
        checkout: Option<&Revision>,
        invocation: Invocation,
    ) -> Result<()> {
        let output = self.runner.run(&invocation)?;
        if output.success {
            return Ok(());
        }

        Err(classify_failure(
            url,
            checkout,
            output.into_failure(&invocation),
        ))
    }
}

impl<R> GitCloner<R>
where
    R: CommandRunner + Clone + Send + 'static,
{
    /// Runs [`clone_repo`](Self::clone_repo) on the blocking thread pool.
    ///
    /// The subprocesses still block a pool thread until they exit.
    pub async fn clone_repo_async(
        &self,
        request: CloneRequest,
        clone_to_dir: impl Into<PathBuf>,
    ) -> Result<PathBuf> {
        let cloner = self.clone();
        let clone_to_dir = clone_to_dir.into();

        tokio::task::spawn_blocking(move || cloner.clone_request(&request, &clone_to_dir))
            .await
            .map_err(|e| {
                FetchError::Io(std::io::Error::other(format!("Clone task failed: {}", e)))
            })?
    }
}

/// Clones `repo_url` into `clone_to_dir` with default options.
///
/// `checkout` names a branch, tag or commit to switch to after cloning.
///
/// ```no_run
/// let tmp = tempfile::tempdir()?;
/// let path = repofetch_git::clone_repo("https://example.com/foo/bar.git", &tmp, Some("v1.0"))?;
/// assert!(path.ends_with("bar"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn clone_repo(
    repo_url: &str,
    clone_to_dir: impl AsRef<Path>,
    checkout: Option<&str>,
) -> Result<PathBuf> {
    let url = RepoUrl::new(repo_url);
    let checkout = checkout.map(Revision::new);
    GitCloner::default().clone_repo(&url, clone_to_dir, checkout.as_ref())
}
