//! Authentication for GitHub
//!
//! Supports an explicit token, environment variables, and the `gh` CLI.
//! No token at all is valid: public repositories can be read anonymously.

mod github;

pub use github::{GitHubAuthConfig, get_github_auth};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token passed on the command line
    Flag,
    /// Token from environment variable
    EnvVar,
    /// Token from CLI tool (gh)
    Cli,
}

impl std::fmt::Display for AuthSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--auth-token"),
            Self::EnvVar => write!(f, "environment"),
            Self::Cli => write!(f, "gh CLI"),
        }
    }
}
