//! Changelog pipeline
//!
//! Three-phase pattern:
//! 1. Gather - replay merge commits and fetch merged PRs (effectful, `collect`)
//! 2. Classify - map each PR to a group and prefix tags (pure)
//! 3. Group - order groups and entries for rendering (pure)

mod classify;
mod collect;
mod group;
mod merges;
mod progress;
mod render;

pub use classify::Classifier;
pub use collect::collect_changelog;
pub use group::{group_entries, sort_entries};
pub use merges::{MergeCommit, extract_merged_prs, parse_merge_commit};
pub use progress::{NoopProgress, ProgressCallback};
pub use render::{render_entry, render_markdown};
