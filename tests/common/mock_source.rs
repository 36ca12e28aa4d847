//! Mock changelog source for testing
//!
//! Serves canned commit messages and PRs from memory, records calls, and
//! can inject failures.

use async_trait::async_trait;
use changelog_gen::error::{Error, Result};
use changelog_gen::platform::ChangelogSource;
use changelog_gen::types::{CommitRange, Issue, RepoConfig};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory `ChangelogSource`
///
/// Features:
/// - Configurable commit messages and PR records
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockChangelogSource {
    config: RepoConfig,
    messages: Mutex<Vec<String>>,
    issues: Mutex<HashMap<u64, Issue>>,
    // Call tracking
    compare_calls: Mutex<Vec<CommitRange>>,
    get_pr_calls: Mutex<Vec<u64>>,
    // Error injection
    error_on_compare: Mutex<Option<String>>,
    error_on_get_pr: Mutex<Option<u64>>,
}

impl MockChangelogSource {
    /// Create a new mock with the given config
    pub fn with_config(config: RepoConfig) -> Self {
        Self {
            config,
            messages: Mutex::new(Vec::new()),
            issues: Mutex::new(HashMap::new()),
            compare_calls: Mutex::new(Vec::new()),
            get_pr_calls: Mutex::new(Vec::new()),
            error_on_compare: Mutex::new(None),
            error_on_get_pr: Mutex::new(None),
        }
    }

    /// Set the commit messages returned by `compare_commit_messages`
    pub fn set_messages<S: Into<String>>(&self, messages: impl IntoIterator<Item = S>) {
        *self.messages.lock().unwrap() = messages.into_iter().map(Into::into).collect();
    }

    /// Register a PR served by `get_pull_request`
    pub fn add_issue(&self, issue: Issue) {
        self.issues.lock().unwrap().insert(issue.number, issue);
    }

    /// Make `compare_commit_messages` return an error
    pub fn fail_compare(&self, msg: &str) {
        *self.error_on_compare.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `get_pull_request` fail for one PR number
    pub fn fail_get_pr(&self, number: u64) {
        *self.error_on_get_pr.lock().unwrap() = Some(number);
    }

    // === Call inspection ===

    /// Ranges passed to `compare_commit_messages`
    pub fn get_compare_calls(&self) -> Vec<CommitRange> {
        self.compare_calls.lock().unwrap().clone()
    }

    /// PR numbers passed to `get_pull_request`, in call order
    pub fn get_pr_calls(&self) -> Vec<u64> {
        self.get_pr_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChangelogSource for MockChangelogSource {
    async fn compare_commit_messages(&self, range: &CommitRange) -> Result<Vec<String>> {
        self.compare_calls.lock().unwrap().push(range.clone());
        if let Some(msg) = self.error_on_compare.lock().unwrap().clone() {
            return Err(Error::GitHubApi(msg));
        }
        Ok(self.messages.lock().unwrap().clone())
    }

    async fn get_pull_request(&self, number: u64) -> Result<Issue> {
        self.get_pr_calls.lock().unwrap().push(number);
        if *self.error_on_get_pr.lock().unwrap() == Some(number) {
            return Err(Error::GitHubApi(format!("Not Found: pull {number}")));
        }
        self.issues
            .lock()
            .unwrap()
            .get(&number)
            .cloned()
            .ok_or_else(|| Error::GitHubApi(format!("Not Found: pull {number}")))
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}
