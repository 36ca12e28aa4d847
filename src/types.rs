//! Core types for changelog-gen

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Display category for entries that match no group rule
pub const MISC_GROUP: &str = "Misc";

/// A pull request as seen by the classifier
///
/// Only the fields that drive classification are kept. Labels are in the
/// order the host reports them; duplicates and mixed case are possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Label names attached to the PR
    pub labels: Vec<String>,
}

impl Issue {
    /// Create an issue from its parts
    pub fn new(number: u64, title: impl Into<String>, labels: &[&str]) -> Self {
        Self {
            number,
            title: title.into(),
            labels: labels.iter().map(ToString::to_string).collect(),
        }
    }
}

/// A classified changelog line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedEntry {
    /// Canonical group title (None falls back to "Misc")
    pub group: Option<String>,
    /// PR number
    pub number: u64,
    /// Distinct prefix titles, in prefix-rule declared order
    pub prefixes: Vec<String>,
    /// PR title
    pub title: String,
    /// Not verified as backported to the maintenance branch
    pub questionable: bool,
}

impl ClassifiedEntry {
    /// Group title used for display and partitioning
    pub fn group_title(&self) -> &str {
        self.group.as_deref().unwrap_or(MISC_GROUP)
    }

    /// Whether at least one prefix tag applies
    pub fn has_prefixes(&self) -> bool {
        !self.prefixes.is_empty()
    }

    /// Prefix tags rendered as `[A][B]` (empty when there are none)
    pub fn prefix_string(&self) -> String {
        self.prefixes.iter().map(|p| format!("[{p}]")).collect()
    }
}

/// An ordered changelog section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogGroup {
    /// Section title
    pub title: String,
    /// Entries in display order
    pub entries: Vec<ClassifiedEntry>,
}

/// Two commitish endpoints (SHA, tag, branch) to compare
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRange {
    /// Commitish of the previous release
    pub from: String,
    /// Commitish of the new release
    pub to: String,
}

impl CommitRange {
    /// Create a range, rejecting blank endpoints
    pub fn new(from: &str, to: &str) -> Result<Self> {
        let from = from.trim();
        let to = to.trim();
        if from.is_empty() {
            return Err(Error::InvalidRange("missing 'from' commitish".to_string()));
        }
        if to.is_empty() {
            return Err(Error::InvalidRange("missing 'to' commitish".to_string()));
        }
        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    /// The `base...head` form used by the compare API
    pub fn basehead(&self) -> String {
        format!("{}...{}", self.from, self.to)
    }
}

impl std::fmt::Display for CommitRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} and {}", self.from, self.to)
    }
}

/// Repository coordinates on the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}

/// A fully built changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changelog {
    /// Range the changelog covers
    pub range: CommitRange,
    /// Merged PR numbers, ascending
    pub merged: Vec<u64>,
    /// Ordered groups ready for rendering
    pub groups: Vec<ChangelogGroup>,
}

impl Changelog {
    /// Number of rendered entries (ignored PRs excluded)
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

/// Result of collecting a changelog for a range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangelogOutcome {
    /// No merged PRs in the range; nothing was fetched or classified
    NothingToReport,
    /// At least one merged PR was found
    Changelog(Changelog),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(group: Option<&str>, prefixes: &[&str]) -> ClassifiedEntry {
        ClassifiedEntry {
            group: group.map(ToString::to_string),
            number: 1,
            prefixes: prefixes.iter().map(ToString::to_string).collect(),
            title: "t".to_string(),
            questionable: true,
        }
    }

    #[test]
    fn test_group_title_falls_back_to_misc() {
        assert_eq!(entry(None, &[]).group_title(), "Misc");
        assert_eq!(entry(Some("Bugfixes"), &[]).group_title(), "Bugfixes");
    }

    #[test]
    fn test_prefix_string_has_no_separator() {
        assert_eq!(entry(None, &["Linux", "Windows"]).prefix_string(), "[Linux][Windows]");
        assert_eq!(entry(None, &[]).prefix_string(), "");
    }

    #[test]
    fn test_commit_range_trims_and_rejects_blank() {
        let range = CommitRange::new(" 0.10.0 ", "master").unwrap();
        assert_eq!(range.basehead(), "0.10.0...master");
        assert_eq!(range.to_string(), "0.10.0 and master");

        assert!(matches!(
            CommitRange::new("  ", "master"),
            Err(Error::InvalidRange(_))
        ));
        assert!(matches!(
            CommitRange::new("v1", ""),
            Err(Error::InvalidRange(_))
        ));
    }
}
