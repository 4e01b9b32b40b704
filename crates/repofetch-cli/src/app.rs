//! The clone workflow behind the `repofetch` binary.

use std::path::PathBuf;

use repofetch_git::{CloneRequest, GitCloner, RepoUrl, Revision};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::CliError;
use crate::settings::Settings;

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloneOutcome {
    /// Repository that was cloned.
    pub url: RepoUrl,
    /// Revision that was checked out, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<Revision>,
    /// Path of the working copy.
    pub path: PathBuf,
    /// Whether the working copy was left on disk.
    pub kept: bool,
}

/// Clones `request` into a fresh temporary directory.
///
/// The temporary directory is removed on every error path. On success it is
/// kept when `settings.keep` is set and removed otherwise.
pub async fn fetch(settings: &Settings, request: CloneRequest) -> Result<CloneOutcome, CliError> {
    let options = settings.clone_options()?;

    let mut builder = tempfile::Builder::new();
    builder.prefix("repofetch-");
    let temp_dir = match &settings.temp_parent {
        Some(parent) => builder.tempdir_in(parent),
        None => builder.tempdir(),
    }
    .map_err(CliError::TempDir)?;

    debug!("Created temporary directory {}", temp_dir.path().display());

    let result = GitCloner::new(options)
        .clone_repo_async(request.clone(), temp_dir.path())
        .await;

    let path = match result {
        Ok(path) => path,
        Err(err) => {
            if let Some(failure) = err.command_failure() {
                debug!("{} output:\n{}", failure.command_line(), failure.output);
            }
            return Err(err.into());
        },
    };

    let kept = settings.keep;
    if kept {
        let kept_dir = temp_dir.keep();
        debug!("Keeping temporary directory {}", kept_dir.display());
        info!("Cloned {} into {}", request.url, path.display());
    }

    Ok(CloneOutcome {
        url: request.url,
        checkout: request.checkout,
        path,
        kept,
    })
}
