//! Grouping and ordering of classified entries

use crate::taxonomy::Taxonomy;
use crate::types::{ChangelogGroup, ClassifiedEntry};
use std::cmp::Reverse;

/// Partition entries into groups, ordered for display
///
/// Groups follow the declared order of the group rules; "Misc" (and any
/// title the taxonomy does not know) comes last. Within a group, entries
/// with prefix tags come first, then ascending PR number.
pub fn group_entries<I>(entries: I, taxonomy: &Taxonomy) -> Vec<ChangelogGroup>
where
    I: IntoIterator<Item = ClassifiedEntry>,
{
    let mut groups: Vec<ChangelogGroup> = Vec::new();

    for entry in entries {
        let title = entry.group_title();
        if let Some(group) = groups.iter_mut().find(|g| g.title == title) {
            group.entries.push(entry);
        } else {
            groups.push(ChangelogGroup {
                title: title.to_string(),
                entries: vec![entry],
            });
        }
    }

    // Stable: equal ranks keep first-seen order
    groups.sort_by_key(|g| taxonomy.group_rank(&g.title));
    for group in &mut groups {
        sort_entries(&mut group.entries);
    }
    groups
}

/// Order entries within a group: prefixed first, then by PR number
pub fn sort_entries(entries: &mut [ClassifiedEntry]) {
    entries.sort_by_key(|e| (Reverse(e.has_prefixes()), e.number));
}
