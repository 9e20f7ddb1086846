use crate::error::{CommitKitError, Result};
use crate::git::CommitRecord;
use git2::{Oid, Repository as Git2Repo, Sort};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

fn record(oid: Oid, commit: &git2::Commit<'_>) -> CommitRecord {
    CommitRecord {
        hash: oid.to_string(),
        message: commit.message().unwrap_or("").to_string(),
        author: commit.author().name().unwrap_or("unknown").to_string(),
    }
}

impl super::Repository for Git2Repository {
    fn resolve(&self, rev: &str) -> Result<Oid> {
        let object = self
            .repo
            .revparse_single(rev)
            .map_err(|e| CommitKitError::usage(format!("Cannot resolve '{}': {}", rev, e)))?;

        let commit = object.peel_to_commit().map_err(|e| {
            CommitKitError::usage(format!("'{}' does not point at a commit: {}", rev, e))
        })?;

        Ok(commit.id())
    }

    fn commit(&self, oid: Oid) -> Result<CommitRecord> {
        let commit = self.repo.find_commit(oid)?;
        Ok(record(oid, &commit))
    }

    fn commits_between(&self, from: Option<Oid>, to: Oid) -> Result<Vec<CommitRecord>> {
        // One walk over the whole range instead of a lookup per hash.
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;
        revwalk.push(to)?;
        if let Some(from) = from {
            revwalk.hide(from)?;
        }

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(record(oid, &commit));
        }

        Ok(commits)
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;
    use git2::Signature;
    use tempfile::TempDir;

    fn commit(repo: &Git2Repo, message: &str) -> Oid {
        let signature = Signature::now("Test Author", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parents: Vec<git2::Commit> = repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok())
            .into_iter()
            .collect();
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parent_refs,
        )
        .unwrap()
    }

    #[test]
    fn test_commits_between_is_oldest_first() {
        let dir = TempDir::new().unwrap();
        let raw = Git2Repo::init(dir.path()).unwrap();
        let first = commit(&raw, ":tada: init(repo): begin the project");
        let second = commit(&raw, ":bug: fix(api): handle null values");
        let third = commit(&raw, ":sparkles: feat/new(api): add search endpoint");

        let repo = Git2Repository::from_git2(raw);
        let records = repo.commits_between(Some(first), third).unwrap();
        let hashes: Vec<String> = records.iter().map(|r| r.hash.clone()).collect();
        assert_eq!(hashes, vec![second.to_string(), third.to_string()]);
        assert_eq!(records[0].author, "Test Author");

        assert_eq!(repo.commits_between(None, third).unwrap().len(), 3);
        assert_eq!(
            repo.commit(second).unwrap().message,
            ":bug: fix(api): handle null values"
        );
    }

    #[test]
    fn test_resolve_tag_and_head() {
        let dir = TempDir::new().unwrap();
        let raw = Git2Repo::init(dir.path()).unwrap();
        let first = commit(&raw, ":tada: init(repo): begin the project");
        {
            let object = raw.find_object(first, None).unwrap();
            raw.tag_lightweight("v0.1.0", &object, false).unwrap();
        }

        let repo = Git2Repository::from_git2(raw);
        assert_eq!(repo.resolve("v0.1.0").unwrap(), first);
        assert_eq!(repo.resolve("HEAD").unwrap(), first);
        assert!(repo.resolve("does-not-exist").is_err());
        assert_eq!(repo.list_tags().unwrap(), vec!["v0.1.0".to_string()]);
    }
}
