//! Error types for changelog-gen

use thiserror::Error;

/// Errors surfaced by the host, configuration and CLI layers.
///
/// The classification core never produces these; unexpected input shapes
/// degrade to fallback behavior instead.
#[derive(Debug, Error)]
pub enum Error {
    /// GitHub API request failed (auth, not found, rate limited, ...)
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Taxonomy file missing, unreadable or invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// Commit range endpoints are missing or malformed
    #[error("invalid commit range: {0}")]
    InvalidRange(String),

    /// I/O failure (writing output, reading files)
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => Self::GitHubApi(source.message.clone()),
            other => Self::GitHubApi(other.to_string()),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
