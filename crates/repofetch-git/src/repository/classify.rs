//! Classification of failed git invocations.

use repofetch_core::{CommandFailure, FetchError, RepoUrl, Revision};
use tracing::error;

/// Output fragments git prints when a revision cannot be resolved.
pub const BRANCH_ERRORS: &[&str] = &["error: pathspec", "unknown revision"];

/// Maps a failed clone or checkout onto the error taxonomy.
///
/// "not found" (any case) wins over the revision patterns. Output matching
/// neither is logged and returned unchanged as [`FetchError::Command`].
pub fn classify_failure(
    url: &RepoUrl,
    checkout: Option<&Revision>,
    failure: CommandFailure,
) -> FetchError {
    if failure.output.to_lowercase().contains("not found") {
        return FetchError::repository_not_found(url, failure);
    }

    if BRANCH_ERRORS
        .iter()
        .any(|pattern| failure.output.contains(pattern))
    {
        return FetchError::repository_clone_failed(
            url,
            checkout.map(Revision::as_str),
            failure,
        );
    }

    error!("git clone failed with error: {}", failure.output);
    FetchError::Command(failure)
}
