//! Label taxonomy - the rule tables that drive classification
//!
//! Two ordered rule lists map raw label/keyword strings to canonical titles:
//! - group rules: mutually exclusive, declared order is group display order
//! - prefix rules: additive tags, declared order is tag display order
//!
//! Plus an ignore set of labels that drop a PR entirely, and the label that
//! marks a PR as verified-backported.

mod storage;

pub use storage::{default_taxonomy_path, load_taxonomy, save_taxonomy};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Maps a raw label (or title keyword) to a canonical title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRule {
    /// Raw label name, also matched as a whole word in PR titles
    pub label: String,
    /// Canonical title shown in the changelog
    pub title: String,
}

impl LabelRule {
    /// Create a rule
    pub fn new(label: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            title: title.into(),
        }
    }
}

fn rules(pairs: &[(&str, &str)]) -> Vec<LabelRule> {
    pairs
        .iter()
        .map(|(label, title)| LabelRule::new(*label, *title))
        .collect()
}

/// Classification configuration, built once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Taxonomy {
    /// Label confirming the PR was backported to the maintenance branch
    pub backport_label: String,
    /// Labels that exclude a PR from the changelog
    pub ignore: Vec<String>,
    /// Group rules in display precedence order
    pub groups: Vec<LabelRule>,
    /// Prefix rules in display precedence order
    pub prefixes: Vec<LabelRule>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self {
            backport_label: "backported-0.10.x".to_string(),
            ignore: vec!["wont-backport".to_string(), "backported-0.9".to_string()],
            groups: rules(&[
                ("api", "New features/APIs"),
                ("area-dev-tools", "Dev-Tools"),
                ("bug", "Bugfixes"),
                ("bugfix", "Bugfixes"),
                ("fix", "Bugfixes"),
                ("fixes", "Bugfixes"),
                ("dev-tools", "Dev-Tools"),
                ("devtools", "Dev-Tools"),
            ]),
            prefixes: rules(&[
                ("breaking-change", "Breaking-Change"),
                ("os-linux", "Linux"),
                ("os-windows", "Windows"),
                ("os-macos", "macOS"),
                ("os-browser", "Browser"),
                ("os-ios", "iOS"),
                ("os-android", "Android"),
                ("area-x11", "Linux"),
                ("win32", "Windows"),
                ("win", "Windows"),
                ("osx", "macOS"),
                ("macos", "macOS"),
                ("browser", "Browser"),
                ("wasm", "Browser"),
                ("ios", "iOS"),
                ("android", "Android"),
            ]),
        }
    }
}

impl Taxonomy {
    /// Display rank of a group title (unknown titles, i.e. "Misc", sort last)
    pub fn group_rank(&self, title: &str) -> usize {
        rank(&self.groups, title)
    }

    /// Display rank of a prefix title within an entry
    pub fn prefix_rank(&self, title: &str) -> usize {
        rank(&self.prefixes, title)
    }

    /// Whether a label is in the ignore set (case-insensitive)
    pub fn is_ignored(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.ignore.iter().any(|i| i.to_lowercase() == label)
    }

    /// Reject rule tables that cannot classify anything sensibly
    pub fn validate(&self) -> Result<()> {
        for (kind, list) in [("group", &self.groups), ("prefix", &self.prefixes)] {
            for (idx, rule) in list.iter().enumerate() {
                if rule.label.trim().is_empty() {
                    return Err(Error::Config(format!("{kind} rule #{} has an empty label", idx + 1)));
                }
                if rule.title.trim().is_empty() {
                    return Err(Error::Config(format!(
                        "{kind} rule '{}' has an empty title",
                        rule.label
                    )));
                }
            }
        }
        if self.ignore.iter().any(|l| l.trim().is_empty()) {
            return Err(Error::Config("ignore list contains an empty label".to_string()));
        }
        if self.backport_label.trim().is_empty() {
            return Err(Error::Config("backport_label must not be empty".to_string()));
        }
        Ok(())
    }
}

fn distinct_titles(rules: &[LabelRule]) -> Vec<&str> {
    let mut titles: Vec<&str> = Vec::new();
    for rule in rules {
        if !titles.contains(&rule.title.as_str()) {
            titles.push(&rule.title);
        }
    }
    titles
}

// Index among distinct titles; usize::MAX when absent
fn rank(rules: &[LabelRule], title: &str) -> usize {
    distinct_titles(rules)
        .iter()
        .position(|t| *t == title)
        .unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_rank_unknown_sorts_last() {
        let taxonomy = Taxonomy::default();
        // Aliases share the rank of their first declaration
        assert_eq!(taxonomy.group_rank("New features/APIs"), 0);
        assert_eq!(taxonomy.group_rank("Dev-Tools"), 1);
        assert_eq!(taxonomy.group_rank("Bugfixes"), 2);
        assert_eq!(taxonomy.group_rank("Misc"), usize::MAX);
    }

    #[test]
    fn test_prefix_rank_uses_first_declaration() {
        let taxonomy = Taxonomy::default();
        // "Linux" is declared by os-linux (2nd) and again by area-x11
        assert_eq!(taxonomy.prefix_rank("Breaking-Change"), 0);
        assert_eq!(taxonomy.prefix_rank("Linux"), 1);
        assert_eq!(taxonomy.prefix_rank("Android"), 6);
    }

    #[test]
    fn test_is_ignored_case_insensitive() {
        let taxonomy = Taxonomy::default();
        assert!(taxonomy.is_ignored("wont-backport"));
        assert!(taxonomy.is_ignored("Wont-Backport"));
        assert!(!taxonomy.is_ignored("backported-0.10.x"));
    }

    #[test]
    fn test_validate_default_ok() {
        assert!(Taxonomy::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let mut taxonomy = Taxonomy::default();
        taxonomy.prefixes.push(LabelRule::new("arm64", " "));
        match taxonomy.validate() {
            Err(Error::Config(msg)) => assert!(msg.contains("arm64")),
            other => panic!("Expected Config error, got: {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_empty_backport_label() {
        let taxonomy = Taxonomy {
            backport_label: String::new(),
            ..Taxonomy::default()
        };
        assert!(matches!(taxonomy.validate(), Err(Error::Config(_))));
    }
}
