use repofetch_git::FetchError;
use thiserror::Error;

/// Errors surfaced by the `repofetch` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings loaded but hold an unusable value.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// The temporary directory could not be created.
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),

    /// The clone itself failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl CliError {
    /// Exit code for this error.
    ///
    /// 1 for classified fetch errors (missing git, unknown repository or
    /// revision), 2 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Fetch(err) if err.is_classified() => 1,
            _ => 2,
        }
    }
}
