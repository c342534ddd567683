//! Navigation parameters identifying one commit

use std::fmt;

/// The (owner, repo, commit) triple a view is opened for
///
/// Segments are treated as opaque, URL-safe path segments. The only
/// validation is non-emptiness, see [`CommitRoute::is_complete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CommitRoute {
    pub owner: String,
    pub repo: String,
    pub commit_oid: String,
}

impl CommitRoute {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        commit_oid: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            commit_oid: commit_oid.into(),
        }
    }

    /// Same repository, different commit
    pub fn with_commit(&self, commit_oid: impl Into<String>) -> Self {
        Self {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            commit_oid: commit_oid.into(),
        }
    }

    /// All three segments are non-empty; nothing is fetched otherwise
    pub fn is_complete(&self) -> bool {
        !self.owner.is_empty() && !self.repo.is_empty() && !self.commit_oid.is_empty()
    }

    /// Path of the commit metadata endpoint, relative to the base URL
    pub fn commit_path(&self) -> String {
        format!(
            "repositories/{}/{}/commits/{}",
            self.owner, self.repo, self.commit_oid
        )
    }

    /// Path of the diff endpoint, relative to the base URL
    pub fn diff_path(&self) -> String {
        format!("{}/diff", self.commit_path())
    }
}

impl fmt::Display for CommitRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.owner, self.repo, self.commit_oid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let route = CommitRoute::new("octo", "hello", "abc123");
        assert_eq!(route.commit_path(), "repositories/octo/hello/commits/abc123");
        assert_eq!(
            route.diff_path(),
            "repositories/octo/hello/commits/abc123/diff"
        );
    }

    #[test]
    fn test_is_complete() {
        assert!(CommitRoute::new("o", "r", "c").is_complete());
        assert!(!CommitRoute::new("", "r", "c").is_complete());
        assert!(!CommitRoute::new("o", "", "c").is_complete());
        assert!(!CommitRoute::new("o", "r", "").is_complete());
        assert!(!CommitRoute::default().is_complete());
    }

    #[test]
    fn test_with_commit_keeps_repository() {
        let route = CommitRoute::new("o", "r", "child");
        let parent = route.with_commit("parent");
        assert_eq!(parent, CommitRoute::new("o", "r", "parent"));
    }

    #[test]
    fn test_display() {
        let route = CommitRoute::new("o", "r", "c");
        assert_eq!(route.to_string(), "o/r@c");
    }
}
