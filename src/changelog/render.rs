//! Plain-text rendering of ordered groups

use crate::types::{ChangelogGroup, ClassifiedEntry};

/// Marker printed before entries not verified as backported
pub const QUESTIONABLE_MARKER: &str = "??? ";

/// Render one entry line (without trailing newline)
pub fn render_entry(entry: &ClassifiedEntry) -> String {
    let marker = if entry.questionable {
        QUESTIONABLE_MARKER
    } else {
        ""
    };
    if entry.has_prefixes() {
        format!(
            "{marker}#{} {} {}",
            entry.number,
            entry.prefix_string(),
            entry.title
        )
    } else {
        format!("{marker}#{} {}", entry.number, entry.title)
    }
}

/// Render groups as markdown sections
///
/// Each group is a `### Title` heading, a blank line, one line per entry,
/// and two blank lines.
pub fn render_markdown(groups: &[ChangelogGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&format!("### {}\n\n", group.title));
        for entry in &group.entries {
            out.push_str(&render_entry(entry));
            out.push('\n');
        }
        out.push_str("\n\n");
    }
    out
}
