//! Shared command context for the generate command
//!
//! Resolves everything a run needs before touching the network.

use changelog_gen::auth::get_github_auth;
use changelog_gen::error::Result;
use changelog_gen::platform::{ChangelogSource, create_changelog_source};
use changelog_gen::taxonomy::{Taxonomy, load_taxonomy};
use changelog_gen::types::{CommitRange, RepoConfig};
use std::path::Path;
use tracing::debug;

/// Shared context for commands that talk to the host
///
/// This struct encapsulates the common setup:
/// - Validating the commit range
/// - Loading the taxonomy
/// - Resolving credentials and creating the service
pub struct CommandContext {
    /// Range to report on
    pub range: CommitRange,
    /// Classification rules
    pub taxonomy: Taxonomy,
    /// Host service (GitHub)
    pub source: Box<dyn ChangelogSource>,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(
        repo: RepoConfig,
        from: &str,
        to: &str,
        auth_token: Option<&str>,
        config: Option<&Path>,
    ) -> Result<Self> {
        let range = CommitRange::new(from, to)?;
        let taxonomy = load_taxonomy(config)?;

        let auth = get_github_auth(auth_token);
        if let Some(ref auth) = auth {
            debug!(source = %auth.source, "authenticated");
        }

        debug!(owner = %repo.owner, repo = %repo.repo, "creating GitHub service");
        let source = create_changelog_source(&repo, auth.as_ref())?;

        Ok(Self {
            range,
            taxonomy,
            source,
        })
    }
}
