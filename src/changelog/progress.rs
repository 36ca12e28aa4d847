//! Progress reporting for changelog collection

use crate::types::CommitRange;
use async_trait::async_trait;

/// Callback for progress updates while gathering PRs
///
/// Frontends (CLI spinner, tests, ...) implement this to observe the
/// effectful phase of [`collect_changelog`](super::collect_changelog).
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Merge commits were replayed; `count` PRs remain merged
    async fn on_merged_found(&self, range: &CommitRange, count: usize);

    /// About to fetch a PR
    async fn on_fetch_pr(&self, number: u64);
}

/// Progress callback that ignores every update
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_merged_found(&self, _range: &CommitRange, _count: usize) {}

    async fn on_fetch_pr(&self, _number: u64) {}
}
