//! Merge extraction - which PRs a commit range actually merged

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

// `Revert "` marker, then the message the merge button writes.
static MERGE_MESSAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(Revert ")?Merge pull request #(\d+)"#).expect("merge pattern is valid")
});

/// A recognized merge-button commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeCommit {
    /// PR was merged
    Merged(u64),
    /// A previous merge of the PR was reverted
    Reverted(u64),
}

/// Recognize a merge (or reverted merge) commit message
///
/// Returns `None` for anything else, including PR numbers that do not fit
/// in a `u64`.
pub fn parse_merge_commit(message: &str) -> Option<MergeCommit> {
    let captures = MERGE_MESSAGE.captures(message)?;
    let number = captures.get(2)?.as_str().parse().ok()?;
    if captures.get(1).is_some() {
        Some(MergeCommit::Reverted(number))
    } else {
        Some(MergeCommit::Merged(number))
    }
}

/// Replay commit messages (chronological order) into the set of merged PRs
///
/// Reverting a PR that was never merged in the range is a no-op. The result
/// is ascending and free of duplicates; an empty result means there is
/// nothing to report.
pub fn extract_merged_prs<I, S>(messages: I) -> Vec<u64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    messages
        .into_iter()
        .filter_map(|m| parse_merge_commit(m.as_ref()))
        .fold(BTreeSet::new(), |mut merged, commit| {
            match commit {
                MergeCommit::Merged(n) => {
                    merged.insert(n);
                }
                MergeCommit::Reverted(n) => {
                    merged.remove(&n);
                }
            }
            merged
        })
        .into_iter()
        .collect()
}
