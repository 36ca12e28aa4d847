//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::ChangelogSource;
use crate::types::{CommitRange, Issue, RepoConfig};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Page size for the compare endpoint (GitHub maximum)
const COMPARE_PAGE_SIZE: u8 = 100;

// REST response types, trimmed to what the changelog needs

#[derive(Deserialize)]
struct CompareResponse {
    total_commits: usize,
    #[serde(default)]
    commits: Vec<CompareCommit>,
}

#[derive(Deserialize)]
struct CompareCommit {
    commit: CommitDetail,
}

#[derive(Deserialize)]
struct CommitDetail {
    message: String,
}

#[derive(Deserialize)]
struct PullResponse {
    number: u64,
    title: Option<String>,
    #[serde(default)]
    labels: Vec<LabelResponse>,
}

#[derive(Deserialize)]
struct LabelResponse {
    name: String,
}

impl From<PullResponse> for Issue {
    fn from(pr: PullResponse) -> Self {
        Self {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            labels: pr.labels.into_iter().map(|l| l.name).collect(),
        }
    }
}

#[derive(Serialize)]
struct PageParams {
    per_page: u8,
    page: u32,
}

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: RepoConfig,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `host` selects a GitHub Enterprise instance (`https://{host}/api/v3`).
    /// Without a token, requests are anonymous.
    pub fn new(
        token: Option<&str>,
        owner: String,
        repo: String,
        host: Option<String>,
    ) -> Result<Self> {
        let base_uri = host.as_ref().map(|h| format!("https://{h}/api/v3"));
        let client = build_client(token, base_uri.as_deref())?;

        Ok(Self {
            client,
            config: RepoConfig { owner, repo, host },
        })
    }

    /// Create a service against an explicit API base URI (e.g. a mock server)
    pub fn with_base_uri(
        token: Option<&str>,
        owner: String,
        repo: String,
        base_uri: &str,
    ) -> Result<Self> {
        let client = build_client(token, Some(base_uri))?;

        Ok(Self {
            client,
            config: RepoConfig {
                owner,
                repo,
                host: None,
            },
        })
    }

    fn repo_route(&self, rest: &str) -> String {
        format!("/repos/{}/{}/{rest}", self.config.owner, self.config.repo)
    }
}

fn build_client(token: Option<&str>, base_uri: Option<&str>) -> Result<Octocrab> {
    let mut builder = Octocrab::builder();

    if let Some(token) = token {
        builder = builder.personal_token(token.to_string());
    }

    if let Some(uri) = base_uri {
        builder = builder
            .base_uri(uri)
            .map_err(|e| Error::GitHubApi(e.to_string()))?;
    }

    builder.build().map_err(|e| Error::GitHubApi(e.to_string()))
}

#[async_trait]
impl ChangelogSource for GitHubService {
    async fn compare_commit_messages(&self, range: &CommitRange) -> Result<Vec<String>> {
        debug!(from = %range.from, to = %range.to, "comparing commits");
        let route = self.repo_route(&format!("compare/{}", range.basehead()));

        let mut messages = Vec::new();
        let mut page = 1;
        loop {
            let params = PageParams {
                per_page: COMPARE_PAGE_SIZE,
                page,
            };
            let response: CompareResponse = self.client.get(&route, Some(&params)).await?;

            let received = response.commits.len();
            messages.extend(response.commits.into_iter().map(|c| c.commit.message));
            debug!(
                page,
                received,
                total = response.total_commits,
                "fetched compare page"
            );

            if received == 0 || messages.len() >= response.total_commits {
                break;
            }
            page += 1;
        }

        debug!(count = messages.len(), "compared commits");
        Ok(messages)
    }

    async fn get_pull_request(&self, number: u64) -> Result<Issue> {
        debug!(number, "getting PR");
        let route = self.repo_route(&format!("pulls/{number}"));

        let pr: PullResponse = self.client.get(&route, None::<&()>).await?;

        let issue = Issue::from(pr);
        debug!(number, labels = issue.labels.len(), "got PR");
        Ok(issue)
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}
