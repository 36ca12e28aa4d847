//! Generate command - build and print the changelog for a range

use crate::cli::context::CommandContext;
use crate::cli::progress::CliProgress;
use crate::cli::style::{Stylize, check};
use anstream::{eprintln, print};
use changelog_gen::changelog::{collect_changelog, render_markdown};
use changelog_gen::error::Result;
use changelog_gen::types::{ChangelogOutcome, RepoConfig};
use std::fs;
use std::path::PathBuf;

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Repository coordinates
    pub repo: RepoConfig,
    /// Commitish of the previous release
    pub from: String,
    /// Commitish of the new release
    pub to: String,
    /// Explicit API token
    pub auth_token: Option<String>,
    /// Taxonomy file
    pub config: Option<PathBuf>,
    /// Write the changelog here instead of stdout
    pub output: Option<PathBuf>,
}

/// Run the generate command
pub async fn run_generate(options: GenerateOptions) -> Result<()> {
    let ctx = CommandContext::new(
        options.repo,
        &options.from,
        &options.to,
        options.auth_token.as_deref(),
        options.config.as_deref(),
    )?;

    let repo = ctx.source.config();
    let progress = CliProgress::spinner(format!(
        "Comparing {} in {}/{}...",
        ctx.range.basehead().emphasis(),
        repo.owner,
        repo.repo
    ));
    let outcome = collect_changelog(
        ctx.source.as_ref(),
        &ctx.taxonomy,
        &ctx.range,
        &progress,
    )
    .await;
    progress.finish();

    let changelog = match outcome? {
        ChangelogOutcome::NothingToReport => {
            eprintln!(
                "{}",
                format!("No merged PRs found between {}", ctx.range).muted()
            );
            return Ok(());
        }
        ChangelogOutcome::Changelog(changelog) => changelog,
    };

    let text = render_markdown(&changelog.groups);
    let skipped = changelog.merged.len().saturating_sub(changelog.entry_count());

    if let Some(ref path) = options.output {
        fs::write(path, &text)?;
        eprintln!(
            "{} Wrote {} entries to {}",
            check(),
            changelog.entry_count().accent(),
            path.display().emphasis()
        );
    } else {
        print!("{text}");
    }

    if skipped > 0 {
        eprintln!(
            "{}",
            format!("{skipped} PR(s) skipped by ignore labels").muted()
        );
    }

    Ok(())
}
