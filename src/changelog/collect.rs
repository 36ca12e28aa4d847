//! Changelog collection - the effectful orchestration around the pure core

use crate::changelog::classify::Classifier;
use crate::changelog::group::group_entries;
use crate::changelog::merges::extract_merged_prs;
use crate::changelog::progress::ProgressCallback;
use crate::error::Result;
use crate::platform::ChangelogSource;
use crate::taxonomy::Taxonomy;
use crate::types::{Changelog, ChangelogOutcome, CommitRange};
use tracing::debug;

/// Build the changelog for a commit range
///
/// Fetches the commit messages of the range, replays merges and reverts,
/// then fetches and classifies every merged PR. When no PR survives the
/// replay, nothing else is fetched and [`ChangelogOutcome::NothingToReport`]
/// is returned.
///
/// Host failures propagate unchanged; classification itself cannot fail.
pub async fn collect_changelog(
    source: &dyn ChangelogSource,
    taxonomy: &Taxonomy,
    range: &CommitRange,
    progress: &dyn ProgressCallback,
) -> Result<ChangelogOutcome> {
    let classifier = Classifier::new(taxonomy)?;

    let messages = source.compare_commit_messages(range).await?;
    debug!(commits = messages.len(), %range, "compared range");

    let merged = extract_merged_prs(&messages);
    progress.on_merged_found(range, merged.len()).await;

    if merged.is_empty() {
        debug!("no merged PRs in range");
        return Ok(ChangelogOutcome::NothingToReport);
    }

    let mut issues = Vec::with_capacity(merged.len());
    for &number in &merged {
        progress.on_fetch_pr(number).await;
        issues.push(source.get_pull_request(number).await?);
    }

    let entries = classifier.classify_all(&issues);
    debug!(
        merged = merged.len(),
        entries = entries.len(),
        "classified PRs"
    );

    Ok(ChangelogOutcome::Changelog(Changelog {
        range: range.clone(),
        merged,
        groups: group_entries(entries, taxonomy),
    }))
}
