//! Commit header presentation model.

use crate::time::format_relative_time;
use chrono::{DateTime, Utc};
use commit_client::CommitInfo;

/// Everything the header shows, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitHeader {
    /// First line of the message.
    pub summary: String,
    /// Remaining message lines (may be empty).
    pub body: String,
    /// Author name.
    pub author: String,
    /// Relative author time.
    pub authored: String,
    /// Present only when the committer differs from the author.
    pub committer: Option<CommitterLine>,
    /// The commit being viewed (from the navigation parameters).
    pub commit_oid: String,
    /// First parent, when the commit has parents.
    pub parent_oid: Option<String>,
}

/// Committer name and relative commit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitterLine {
    pub name: String,
    pub committed: String,
}

impl CommitHeader {
    /// Build the header for `info`, formatting times against `now`.
    pub fn new(info: &CommitInfo, commit_oid: &str, now: DateTime<Utc>) -> Self {
        let committer = info.committed_by_other().then(|| CommitterLine {
            name: info.committer.name.clone(),
            committed: format_relative_time(info.committer.date, now),
        });

        Self {
            summary: info.summary().to_string(),
            body: info.body(),
            author: info.author.name.clone(),
            authored: format_relative_time(info.author.date, now),
            committer,
            commit_oid: commit_oid.to_string(),
            parent_oid: info.first_parent().map(str::to_string),
        }
    }

    /// Body lines as rendered (empty body gives no lines).
    pub fn body_lines(&self) -> Vec<&str> {
        if self.body.is_empty() {
            Vec::new()
        } else {
            self.body.split('\n').collect()
        }
    }

    /// Rows needed to show the header without clipping.
    pub fn height(&self) -> u16 {
        let left = 2 + self.body_lines().len();
        let right = 1
            + usize::from(self.committer.is_some())
            + usize::from(self.parent_oid.is_some());
        // +2 for borders
        (left.max(right) + 2).min(u16::MAX as usize) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use commit_client::{ParentRef, Signature};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn info(author: &str, committer: &str, parents: &[&str]) -> CommitInfo {
        CommitInfo {
            avatar_url: "a.png".to_string(),
            message: "Summary line\nbody one\nbody two".to_string(),
            author: Signature {
                name: author.to_string(),
                date: now() - Duration::hours(3),
            },
            committer: Signature {
                name: committer.to_string(),
                date: now() - Duration::days(40),
            },
            parents: parents
                .iter()
                .map(|oid| ParentRef {
                    oid: oid.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_header_fields() {
        let header = CommitHeader::new(&info("Ada", "Grace", &["p1", "p2"]), "abc123", now());

        assert_eq!(header.summary, "Summary line");
        assert_eq!(header.body_lines(), vec!["body one", "body two"]);
        assert_eq!(header.author, "Ada");
        assert_eq!(header.authored, "three hours ago");
        assert_eq!(
            header.committer,
            Some(CommitterLine {
                name: "Grace".to_string(),
                committed: "1 months ago".to_string(),
            })
        );
        assert_eq!(header.commit_oid, "abc123");
        assert_eq!(header.parent_oid.as_deref(), Some("p1"));
    }

    #[test]
    fn test_committer_hidden_when_same_as_author() {
        let header = CommitHeader::new(&info("Ada", "Ada", &["p1"]), "abc123", now());
        assert_eq!(header.committer, None);
    }

    #[test]
    fn test_committer_comparison_is_case_sensitive() {
        let header = CommitHeader::new(&info("Ada", "ADA", &["p1"]), "abc123", now());
        assert!(header.committer.is_some());
    }

    #[test]
    fn test_root_commit_has_no_parent() {
        let header = CommitHeader::new(&info("Ada", "Ada", &[]), "abc123", now());
        assert_eq!(header.parent_oid, None);
    }

    #[test]
    fn test_height_fits_longest_column() {
        let header = CommitHeader::new(&info("Ada", "Grace", &["p1"]), "abc123", now());
        // summary + author + two body lines, plus borders
        assert_eq!(header.height(), 6);
    }
}
