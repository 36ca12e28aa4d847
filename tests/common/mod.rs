//! Shared test fixtures

#![allow(dead_code)]

mod mock_source;

pub use mock_source::MockChangelogSource;

use changelog_gen::types::{ClassifiedEntry, CommitRange, Issue, RepoConfig};

/// Repository config used by the mocks
pub fn github_config() -> RepoConfig {
    RepoConfig {
        owner: "AvaloniaUI".to_string(),
        repo: "Avalonia".to_string(),
        host: None,
    }
}

/// Range used by most pipeline tests
pub fn range() -> CommitRange {
    CommitRange::new("0.10.0", "0.10.1").unwrap()
}

/// Merge-button commit message for a PR
pub fn merge_message(number: u64) -> String {
    format!("Merge pull request #{number} from contributor/branch-{number}\n\nSome details")
}

/// Revert of a merge-button commit
pub fn revert_message(number: u64) -> String {
    format!(
        "Revert \"Merge pull request #{number} from contributor/branch-{number}\"\n\nThis reverts commit abc."
    )
}

/// Build an issue from string slices
pub fn make_issue(number: u64, title: &str, labels: &[&str]) -> Issue {
    Issue::new(number, title, labels)
}

/// Build a classified entry directly
pub fn make_entry(number: u64, group: Option<&str>, prefixes: &[&str]) -> ClassifiedEntry {
    ClassifiedEntry {
        group: group.map(ToString::to_string),
        number,
        prefixes: prefixes.iter().map(ToString::to_string).collect(),
        title: format!("Change {number}"),
        questionable: true,
    }
}
