//! Common type definitions and newtypes for repofetch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Remote repository location.
///
/// Trailing slashes are trimmed on construction; everything else is kept
/// verbatim and handed to the VCS binary as-is. HTTPS, `file://` and
/// scp-style (`git@host:org/repo.git`) locations are all accepted.
///
/// # Example
///
/// ```
/// use repofetch_core::RepoUrl;
///
/// let url = RepoUrl::new("https://example.com/foo/bar.git/");
/// assert_eq!(url.as_str(), "https://example.com/foo/bar.git");
/// assert_eq!(url.repo_name(), "bar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RepoUrl(String);

impl RepoUrl {
    /// Creates a new RepoUrl, removing trailing slashes.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let trimmed = url.trim_end_matches('/');
        if trimmed.len() == url.len() {
            Self(url)
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Returns the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the directory name `git clone` will create for this URL.
    ///
    /// Takes the last path segment, drops everything up to and including
    /// the last colon, then strips a trailing `.git`.
    ///
    /// ```
    /// use repofetch_core::RepoUrl;
    ///
    /// assert_eq!(RepoUrl::new("git@example.com:foo/bar.git").repo_name(), "bar");
    /// assert_eq!(RepoUrl::new("git@example.com:bar.git").repo_name(), "bar");
    /// ```
    pub fn repo_name(&self) -> &str {
        let last_segment = match self.0.rsplit_once('/') {
            Some((_, after)) => after,
            None => &self.0,
        };
        let last_segment = match last_segment.rsplit_once(':') {
            Some((_, after)) => after,
            None => last_segment,
        };
        last_segment.strip_suffix(".git").unwrap_or(last_segment)
    }
}

impl fmt::Display for RepoUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RepoUrl {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RepoUrl {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<RepoUrl> for String {
    fn from(url: RepoUrl) -> Self {
        url.0
    }
}

/// Branch, tag or commit to check out after cloning.
///
/// The value is passed to `git checkout` unchanged.
///
/// # Example
///
/// ```
/// use repofetch_core::Revision;
///
/// let rev = Revision::new("v1.0");
/// assert_eq!(rev.as_str(), "v1.0");
/// assert!(!rev.looks_like_commit());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Revision(String);

impl Revision {
    /// Creates a new Revision.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the revision as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for 7 to 40 character hex strings (abbreviated or full SHA-1).
    pub fn looks_like_commit(&self) -> bool {
        (7..=40).contains(&self.0.len()) && self.0.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Revision {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Revision {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A repository to fetch together with the optional revision to check out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneRequest {
    /// Remote repository location.
    pub url: RepoUrl,
    /// Revision to check out after cloning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout: Option<Revision>,
}

impl CloneRequest {
    /// Creates a request for the default branch.
    pub fn new(url: impl Into<RepoUrl>) -> Self {
        Self {
            url: url.into(),
            checkout: None,
        }
    }

    /// Sets the revision to check out.
    pub fn with_checkout(mut self, revision: impl Into<Revision>) -> Self {
        self.checkout = Some(revision.into());
        self
    }
}

/// Lexically normalizes a path.
///
/// Collapses `.` components and repeated separators and resolves `..`
/// against preceding normal components. The filesystem is never consulted,
/// so symlinks are not followed. An empty result becomes `.`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                },
                // `/..` is `/`
                Some(Component::RootDir | Component::Prefix(_)) => {},
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }

    normalized
}
