use crate::error::{CommitKitError, Result};
use crate::git::{CommitRecord, Repository};
use git2::Oid;
use std::collections::HashMap;

/// Mock repository with a linear history, for testing without git
pub struct MockRepository {
    history: Vec<(Oid, CommitRecord)>,
    tags: HashMap<String, Oid>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            history: Vec::new(),
            tags: HashMap::new(),
        }
    }

    /// Append a commit; the latest commit is `HEAD`
    pub fn add_commit(&mut self, oid: Oid, info: CommitRecord) {
        self.history.push((oid, info));
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.insert(name.into(), oid);
    }

    fn position(&self, oid: Oid) -> Result<usize> {
        self.history
            .iter()
            .position(|(id, _)| *id == oid)
            .ok_or_else(|| CommitKitError::usage(format!("Unknown commit: {}", oid)))
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn resolve(&self, rev: &str) -> Result<Oid> {
        if rev == "HEAD" {
            return self
                .history
                .last()
                .map(|(oid, _)| *oid)
                .ok_or_else(|| CommitKitError::usage("HEAD does not point at a commit"));
        }
        if let Some(oid) = self.tags.get(rev) {
            return Ok(*oid);
        }
        self.history
            .iter()
            .find(|(oid, _)| oid.to_string() == rev)
            .map(|(oid, _)| *oid)
            .ok_or_else(|| CommitKitError::usage(format!("Cannot resolve '{}'", rev)))
    }

    fn commit(&self, oid: Oid) -> Result<CommitRecord> {
        let position = self.position(oid)?;
        Ok(self.history[position].1.clone())
    }

    fn commits_between(&self, from: Option<Oid>, to: Oid) -> Result<Vec<CommitRecord>> {
        let start = match from {
            Some(from) => self.position(from)? + 1,
            None => 0,
        };
        let end = self.position(to)? + 1;
        Ok(self
            .history
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .map(|(_, record)| record.clone())
            .collect())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let mut tags: Vec<String> = self.tags.keys().cloned().collect();
        tags.sort();
        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hash: &str, message: &str) -> CommitRecord {
        CommitRecord {
            hash: hash.to_string(),
            message: message.to_string(),
            author: "Test Author".to_string(),
        }
    }

    #[test]
    fn test_mock_repository_range() {
        let mut repo = MockRepository::new();
        let oid1 = Oid::from_bytes(&[1; 20]).unwrap();
        let oid2 = Oid::from_bytes(&[2; 20]).unwrap();
        let oid3 = Oid::from_bytes(&[3; 20]).unwrap();

        repo.add_commit(oid1, record("a", "first commit"));
        repo.add_commit(oid2, record("b", "second commit"));
        repo.add_commit(oid3, record("c", "third commit"));

        let commits = repo.commits_between(Some(oid1), oid3).unwrap();
        let hashes: Vec<_> = commits.iter().map(|c| c.hash.as_str()).collect();
        assert_eq!(hashes, vec!["b", "c"]);

        assert_eq!(repo.commits_between(None, oid2).unwrap().len(), 2);
        assert!(repo.commits_between(Some(oid3), oid1).unwrap().is_empty());
    }

    #[test]
    fn test_mock_repository_resolve() {
        let mut repo = MockRepository::new();
        let oid = Oid::from_bytes(&[2; 20]).unwrap();
        repo.add_commit(oid, record("b", "commit"));
        repo.add_tag("v1.0.0", oid);

        assert_eq!(repo.resolve("HEAD").unwrap(), oid);
        assert_eq!(repo.resolve("v1.0.0").unwrap(), oid);
        assert_eq!(repo.resolve(&oid.to_string()).unwrap(), oid);
        assert!(repo.resolve("v2.0.0").is_err());
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.list_tags().unwrap().is_empty());
        assert!(repo.resolve("HEAD").is_err());
    }
}
