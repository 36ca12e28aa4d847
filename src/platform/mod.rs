//! Host services that supply commit ranges and pull requests
//!
//! The changelog pipeline only talks to [`ChangelogSource`], so it can run
//! against GitHub or an in-memory fake.

mod factory;
mod github;

pub use factory::create_changelog_source;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{CommitRange, Issue, RepoConfig};
use async_trait::async_trait;

/// Source of commit messages and PR records for a repository
#[async_trait]
pub trait ChangelogSource: Send + Sync {
    /// Commit messages between two commitish, oldest first
    ///
    /// Must return every commit of the comparison, across pages.
    async fn compare_commit_messages(&self, range: &CommitRange) -> Result<Vec<String>>;

    /// Fetch a pull request's number, title and labels
    async fn get_pull_request(&self, number: u64) -> Result<Issue>;

    /// Get the repository configuration
    fn config(&self) -> &RepoConfig;
}
