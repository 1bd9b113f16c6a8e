//! Starter-kit source classification.
//! Decides whether a configured location is a remote archive, a git
//! repository, or a local path, and derives the local file name for a
//! fetched artifact.

use std::path::PathBuf;
use url::Url;

/// Fallback artifact name for URLs without a usable path segment.
const FALLBACK_FILE_NAME: &str = "starterkit";

/// Represents the source location of a starter kit.
#[derive(Debug, Clone)]
pub enum SourceLocation {
    /// Remote packed starter kit behind an absolute http(s) URL
    Archive(Url),
    /// Git repository (HTTPS or SSH)
    Git(String),
    /// Local filesystem path, either a template directory or a packed file
    Local(PathBuf),
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceLocation::Archive(url) => write!(f, "archive: '{}'", url),
            SourceLocation::Git(repo) => write!(f, "git repository: '{}'", repo),
            SourceLocation::Local(path) => {
                write!(f, "local path: '{}'", path.display())
            }
        }
    }
}

impl SourceLocation {
    /// Classifies a raw location string.
    ///
    /// A string is remote only when it parses as an absolute URL with a host;
    /// relative paths and bare names fall through to `Local`. http(s) URLs
    /// ending in `.git` and `git@` SSH forms are treated as git repositories.
    pub fn from_string(s: &str) -> Self {
        if let Ok(url) = Url::parse(s) {
            match url.scheme() {
                "http" | "https" if url.has_host() => {
                    return if url.path().ends_with(".git") {
                        Self::Git(s.to_string())
                    } else {
                        Self::Archive(url)
                    };
                }
                "git" => return Self::Git(s.to_string()),
                _ => {}
            }
        }

        if s.starts_with("git@") {
            return Self::Git(s.to_string());
        }

        Self::Local(PathBuf::from(s))
    }

    /// Whether the pipeline has to bring the starter kit over the network.
    pub fn is_remote(&self) -> bool {
        !matches!(self, Self::Local(_))
    }
}

/// Extracts the file name under which a fetched artifact is stored locally.
///
/// Takes the last non-empty path segment of the URL; query string and
/// fragment are ignored.
pub fn derive_file_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or(FALLBACK_FILE_NAME)
        .to_string()
}
