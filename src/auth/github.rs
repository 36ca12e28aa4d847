//! GitHub token resolution

use super::AuthSource;
use std::process::Command;
use tracing::debug;

/// Environment variables checked for a token, in order
const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// A resolved GitHub token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubAuthConfig {
    /// Personal access token
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
}

/// Resolve a GitHub token
///
/// Order: explicit token, `GITHUB_TOKEN`/`GH_TOKEN`, then `gh auth token`.
/// Returns `None` when nothing is available; callers fall back to
/// anonymous access.
pub fn get_github_auth(explicit: Option<&str>) -> Option<GitHubAuthConfig> {
    if let Some(token) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        debug!("using token from command line");
        return Some(GitHubAuthConfig {
            token: token.to_string(),
            source: AuthSource::Flag,
        });
    }

    if let Some(token) = token_from_env() {
        debug!("using token from environment");
        return Some(GitHubAuthConfig {
            token,
            source: AuthSource::EnvVar,
        });
    }

    if let Some(token) = token_from_gh_cli() {
        debug!("using token from gh CLI");
        return Some(GitHubAuthConfig {
            token,
            source: AuthSource::Cli,
        });
    }

    debug!("no GitHub token found, using anonymous access");
    None
}

// First non-empty token among the supported environment variables
fn token_from_env() -> Option<String> {
    TOKEN_ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|t| t.trim().to_string())
        .find(|t| !t.is_empty())
}

fn token_from_gh_cli() -> Option<String> {
    let output = Command::new("gh").args(["auth", "token"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let token = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!token.is_empty()).then_some(token)
}
