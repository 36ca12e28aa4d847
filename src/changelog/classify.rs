//! Classification - map a PR to its group, prefix tags and backport status
//!
//! Pure: no I/O, all rules come from the [`Taxonomy`] the classifier was
//! built from.

use crate::error::{Error, Result};
use crate::taxonomy::{LabelRule, Taxonomy};
use crate::types::{ClassifiedEntry, Issue};
use regex::Regex;

/// A label rule with its title-keyword pattern compiled once
#[derive(Debug, Clone)]
struct CompiledRule {
    label: String,
    title: String,
    pattern: Regex,
}

impl CompiledRule {
    fn compile(rule: &LabelRule) -> Result<Self> {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&rule.label)))
            .map_err(|e| Error::Config(format!("invalid rule '{}': {e}", rule.label)))?;
        Ok(Self {
            label: rule.label.to_lowercase(),
            title: rule.title.clone(),
            pattern,
        })
    }

    /// Explicit label match, or the label as a whole word in the PR title
    fn matches(&self, labels: &[String], title: &str) -> bool {
        labels.iter().any(|l| *l == self.label) || self.pattern.is_match(title)
    }
}

fn compile_all(rules: &[LabelRule]) -> Result<Vec<CompiledRule>> {
    rules.iter().map(CompiledRule::compile).collect()
}

/// Classifies PRs against a taxonomy
#[derive(Debug, Clone)]
pub struct Classifier {
    groups: Vec<CompiledRule>,
    prefixes: Vec<CompiledRule>,
    taxonomy: Taxonomy,
}

impl Classifier {
    /// Build a classifier, compiling one title pattern per rule
    pub fn new(taxonomy: &Taxonomy) -> Result<Self> {
        Ok(Self {
            groups: compile_all(&taxonomy.groups)?,
            prefixes: compile_all(&taxonomy.prefixes)?,
            taxonomy: taxonomy.clone(),
        })
    }

    /// Classify one PR
    ///
    /// Returns `None` when the PR carries an ignored label.
    pub fn classify(&self, issue: &Issue) -> Option<ClassifiedEntry> {
        if issue.labels.iter().any(|l| self.taxonomy.is_ignored(l)) {
            return None;
        }

        let labels: Vec<String> = issue.labels.iter().map(|l| l.to_lowercase()).collect();

        let group = self
            .groups
            .iter()
            .find(|rule| rule.matches(&labels, &issue.title))
            .map(|rule| rule.title.clone());

        Some(ClassifiedEntry {
            group,
            number: issue.number,
            prefixes: self.prefixes_for(&labels, &issue.title),
            title: issue.title.clone(),
            questionable: !issue
                .labels
                .iter()
                .any(|l| *l == self.taxonomy.backport_label),
        })
    }

    /// Classify many PRs, dropping ignored ones
    pub fn classify_all<'a, I>(&self, issues: I) -> Vec<ClassifiedEntry>
    where
        I: IntoIterator<Item = &'a Issue>,
    {
        issues.into_iter().filter_map(|i| self.classify(i)).collect()
    }

    // Distinct prefix titles, in the order the prefix rules declare them.
    fn prefixes_for(&self, labels: &[String], title: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for rule in &self.prefixes {
            if rule.matches(labels, title) && !found.contains(&rule.title) {
                found.push(rule.title.clone());
            }
        }
        found.sort_by_key(|t| self.taxonomy.prefix_rank(t));
        found
    }
}
