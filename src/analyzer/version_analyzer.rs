use crate::config::VersionConfig;
use crate::domain::{BumpKind, Commit, Version};
use crate::error::Result;
use crate::git::{self, Repository};
use tracing::{debug, instrument};

/// The dominant bump across `commits`.
///
/// Each commit contributes its category's bump; unknown categories
/// contribute [`BumpKind::None`]. An empty list yields `None`.
pub fn bump_for_commits(commits: &[Commit]) -> BumpKind {
    commits
        .iter()
        .map(|commit| commit.message.category.version_bump)
        .max()
        .unwrap_or(BumpKind::None)
}

/// Analyzes commits to determine the next version
pub struct VersionAnalyzer {
    config: VersionConfig,
}

impl VersionAnalyzer {
    /// Create a new version analyzer
    pub fn new(config: VersionConfig) -> Self {
        VersionAnalyzer { config }
    }

    /// Analyze raw commit messages and determine the version bump
    pub fn analyze_messages(&self, messages: &[String]) -> BumpKind {
        let commits: Vec<Commit> = messages
            .iter()
            .map(|message| Commit::new("", message))
            .collect();
        bump_for_commits(&commits)
    }

    /// Analyze the commits in `from..to` of a repository
    pub fn analyze_repository_range<R: Repository + ?Sized>(
        &self,
        repo: &R,
        from: Option<&str>,
        to: &str,
    ) -> Result<BumpKind> {
        let commits = git::list_commits(repo, from, to)?;
        Ok(bump_for_commits(&commits))
    }

    /// Version that follows `current` once `commits` are released.
    ///
    /// The configured display settings are applied to the result.
    ///
    /// # Returns
    /// * `Err` - If the bump overflows a version component
    #[instrument(skip(self, current, commits), fields(current = %current, commit_count = commits.len()))]
    pub fn next_version(&self, current: &Version, commits: &[Commit]) -> Result<Version> {
        let bump = bump_for_commits(commits);
        let next = self.config.apply(current.bump(bump)?);
        debug!(%bump, next = %next, "resolved next version");
        Ok(next)
    }
}
