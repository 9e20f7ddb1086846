//! Repository history access
//!
//! The [Repository] trait is the only seam between commit-kit and git.
//! [repository::Git2Repository] reads a real repository through `git2`;
//! [mock::MockRepository] serves tests.
//!
//! ```rust
//! # use commit_kit::git::{list_commits, Repository};
//! # fn example<R: Repository>(repo: &R) -> commit_kit::Result<()> {
//! let commits = list_commits(repo, Some("v1.0.0"), "HEAD")?;
//! for commit in commits {
//!     println!("{} {}", commit.short_hash(), commit.message.subject);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::{Commit, Version};
use crate::error::Result;
use git2::Oid;
use tracing::debug;

/// Raw commit data as stored in the repository
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRecord {
    /// Full commit hash
    pub hash: String,
    /// Full commit message
    pub message: String,
    /// Author name
    pub author: String,
}

impl Commit {
    /// Parse a repository record into a commit
    pub fn from_record(record: &CommitRecord) -> Self {
        Commit::new(record.hash.clone(), &record.message)
    }
}

impl From<CommitRecord> for Commit {
    fn from(record: CommitRecord) -> Self {
        Commit::new(record.hash, &record.message)
    }
}

/// Read access to repository history
pub trait Repository {
    /// Resolve a revision (hash, tag, branch, `HEAD`) to a commit id
    ///
    /// # Returns
    /// * `Ok(Oid)` - The commit the revision points at
    /// * `Err` - If the revision does not exist
    fn resolve(&self, rev: &str) -> Result<Oid>;

    /// A single commit by id
    fn commit(&self, oid: Oid) -> Result<CommitRecord>;

    /// Commits reachable from `to` but not from `from`
    ///
    /// Equivalent to `git rev-list from..to`, returned oldest first. With no
    /// `from`, the whole history up to `to` is returned.
    fn commits_between(&self, from: Option<Oid>, to: Oid) -> Result<Vec<CommitRecord>>;

    /// All tag names in the repository
    fn list_tags(&self) -> Result<Vec<String>>;
}

/// Parse every commit in `from..to` into a [`Commit`]
pub fn list_commits<R: Repository + ?Sized>(
    repo: &R,
    from: Option<&str>,
    to: &str,
) -> Result<Vec<Commit>> {
    let from_oid = from.map(|rev| repo.resolve(rev)).transpose()?;
    let to_oid = repo.resolve(to)?;
    let records = repo.commits_between(from_oid, to_oid)?;
    debug!(
        from = from.unwrap_or("<root>"),
        to,
        count = records.len(),
        "listed commits"
    );
    Ok(records.into_iter().map(Commit::from).collect())
}

/// The raw commit a revision points at
pub fn read_commit<R: Repository + ?Sized>(repo: &R, rev: &str) -> Result<CommitRecord> {
    let oid = repo.resolve(rev)?;
    repo.commit(oid)
}

/// The newest tag that parses as a version, with its parsed version
pub fn latest_version_tag<R: Repository + ?Sized>(repo: &R) -> Result<Option<(String, Version)>> {
    let tagged: Vec<(String, Version)> = repo
        .list_tags()?
        .into_iter()
        .filter_map(|tag| Version::parse(&tag).ok().map(|version| (tag, version)))
        .collect();

    let versions: Vec<Version> = tagged.iter().map(|(_, v)| v.clone()).collect();
    let latest = match Version::latest(&versions) {
        Some(latest) => latest,
        None => return Ok(None),
    };

    // Version equality includes the track, so this finds the exact entry.
    Ok(tagged
        .iter()
        .rev()
        .find(|(_, version)| version == latest)
        .cloned())
}
