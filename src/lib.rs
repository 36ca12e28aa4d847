//! changelog-gen - Grouped release changelogs from merged GitHub pull requests
//!
//! This library turns a commit range into a categorized changelog:
//! - Merge commits in the range are replayed to find the merged PRs (reverts cancel merges)
//! - Each PR is classified into one group and zero or more prefix tags
//! - Groups and entries are ordered for rendering
//!
//! The classification pipeline in [`changelog`] is pure. All I/O goes through
//! the [`platform::ChangelogSource`] trait, and configuration is passed explicitly
//! via [`taxonomy::Taxonomy`] (no globals).

pub mod auth;
pub mod changelog;
pub mod error;
pub mod platform;
pub mod taxonomy;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
