//! Source construction from CLI-level configuration

use crate::auth::GitHubAuthConfig;
use crate::error::Result;
use crate::platform::{ChangelogSource, GitHubService};
use crate::types::RepoConfig;

/// Create the changelog source for a repository
///
/// Without credentials the service talks to the API anonymously, which works
/// for public repositories within the unauthenticated rate limit.
pub fn create_changelog_source(
    config: &RepoConfig,
    auth: Option<&GitHubAuthConfig>,
) -> Result<Box<dyn ChangelogSource>> {
    let service = GitHubService::new(
        auth.map(|a| a.token.as_str()),
        config.owner.clone(),
        config.repo.clone(),
        config.host.clone(),
    )?;
    Ok(Box::new(service))
}
