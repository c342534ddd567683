//! Backend data transfer objects
//!
//! These types mirror the JSON returned by the commit endpoints. They are
//! intentionally separate from presentation models so the viewer crate can
//! shape them however it needs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Commit metadata from `GET .../commits/{oid}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitInfo {
    /// Avatar of the author
    #[serde(alias = "avatar_url")]
    pub avatar_url: String,

    /// Full commit message (first line is the summary)
    pub message: String,

    /// Who wrote the change
    pub author: Signature,

    /// Who applied the change
    pub committer: Signature,

    /// Parent commits, first parent first
    #[serde(default)]
    pub parents: Vec<ParentRef>,
}

impl CommitInfo {
    /// First line of the message
    pub fn summary(&self) -> &str {
        self.message.split('\n').next().unwrap_or_default()
    }

    /// Everything after the first line, joined back with newlines
    pub fn body(&self) -> String {
        self.message
            .split('\n')
            .skip(1)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Oid of the first parent, if the commit has one
    pub fn first_parent(&self) -> Option<&str> {
        self.parents.first().map(|p| p.oid.as_str())
    }

    /// Whether the committer should be shown separately from the author
    ///
    /// Exact, case-sensitive comparison of the names.
    pub fn committed_by_other(&self) -> bool {
        self.committer.name != self.author.name
    }
}

/// Name and timestamp of an author or committer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub date: DateTime<Utc>,
}

/// Reference to a parent commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub oid: String,
}

/// One changed file from `GET .../commits/{oid}/diff`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffFile {
    /// The file after the change
    pub head_file: FileRef,

    /// Change hunks in file order
    #[serde(default)]
    pub hunks: Vec<Hunk>,
}

impl DiffFile {
    /// Path of the file after the change
    pub fn path(&self) -> &str {
        &self.head_file.path
    }
}

/// A file on one side of the diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub path: String,
}

/// A contiguous region of changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    /// Free-form context line (e.g. "@@ -10,5 +10,7 @@ fn example()")
    pub header: String,

    /// Lines in this hunk, top to bottom
    #[serde(default)]
    pub lines: Vec<DiffLine>,
}

/// A single line in a hunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    /// Raw line content including the leading marker character
    pub content: String,

    /// Line number in the base file, absent for pure additions
    #[serde(default)]
    pub base_line_number: Option<u32>,

    /// Line number in the head file, absent for pure removals
    #[serde(default)]
    pub head_line_number: Option<u32>,
}

impl DiffLine {
    pub fn new(
        content: impl Into<String>,
        base_line_number: Option<u32>,
        head_line_number: Option<u32>,
    ) -> Self {
        Self {
            content: content.into(),
            base_line_number,
            head_line_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMIT_JSON: &str = r#"{
        "avatarUrl": "https://example.com/avatar.png",
        "message": "Fix the frobnicator\n\nIt was broken.\nNow it is not.",
        "author": { "name": "Ada", "date": "2024-05-01T10:00:00Z" },
        "committer": { "name": "Grace", "date": "2024-05-02T11:30:00Z" },
        "parents": [ { "oid": "p1" }, { "oid": "p2" } ]
    }"#;

    #[test]
    fn test_commit_info_deserialization() {
        let info: CommitInfo = serde_json::from_str(COMMIT_JSON).unwrap();

        assert_eq!(info.avatar_url, "https://example.com/avatar.png");
        assert_eq!(info.author.name, "Ada");
        assert_eq!(info.committer.name, "Grace");
        assert_eq!(info.parents.len(), 2);
        assert_eq!(info.first_parent(), Some("p1"));
    }

    #[test]
    fn test_commit_info_accepts_snake_case_avatar() {
        let json = r#"{
            "avatar_url": "a.png",
            "message": "m",
            "author": { "name": "A", "date": "2024-05-01T10:00:00Z" },
            "committer": { "name": "A", "date": "2024-05-01T10:00:00Z" },
            "parents": []
        }"#;
        let info: CommitInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.avatar_url, "a.png");
        assert_eq!(info.first_parent(), None);
    }

    #[test]
    fn test_summary_and_body() {
        let info: CommitInfo = serde_json::from_str(COMMIT_JSON).unwrap();
        assert_eq!(info.summary(), "Fix the frobnicator");
        assert_eq!(info.body(), "\nIt was broken.\nNow it is not.");
    }

    #[test]
    fn test_single_line_message_has_empty_body() {
        let mut info: CommitInfo = serde_json::from_str(COMMIT_JSON).unwrap();
        info.message = "just a summary".to_string();
        assert_eq!(info.summary(), "just a summary");
        assert_eq!(info.body(), "");
    }

    #[test]
    fn test_committed_by_other_is_case_sensitive() {
        let mut info: CommitInfo = serde_json::from_str(COMMIT_JSON).unwrap();
        assert!(info.committed_by_other());

        info.committer.name = "Ada".to_string();
        assert!(!info.committed_by_other());

        info.committer.name = "ada".to_string();
        assert!(info.committed_by_other());
    }

    #[test]
    fn test_missing_author_is_an_error() {
        let json = r#"{ "avatarUrl": "a", "message": "m", "parents": [] }"#;
        assert!(serde_json::from_str::<CommitInfo>(json).is_err());
    }

    #[test]
    fn test_diff_line_numbers_null_or_missing() {
        let json = r#"[{
            "headFile": { "path": "src/lib.rs" },
            "hunks": [{
                "header": "@@ -1,2 +1,2 @@",
                "lines": [
                    { "content": "+foo", "baseLineNumber": null, "headLineNumber": 42 },
                    { "content": "-bar", "baseLineNumber": 7 },
                    { "content": " baz", "baseLineNumber": 8, "headLineNumber": 43 }
                ]
            }]
        }]"#;
        let files: Vec<DiffFile> = serde_json::from_str(json).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path(), "src/lib.rs");
        let lines = &files[0].hunks[0].lines;
        assert_eq!(lines[0], DiffLine::new("+foo", None, Some(42)));
        assert_eq!(lines[1], DiffLine::new("-bar", Some(7), None));
        assert_eq!(lines[2], DiffLine::new(" baz", Some(8), Some(43)));
    }

    #[test]
    fn test_diff_file_order_is_preserved() {
        let json = r#"[
            { "headFile": { "path": "b.txt" }, "hunks": [] },
            { "headFile": { "path": "a.txt" }, "hunks": [] }
        ]"#;
        let files: Vec<DiffFile> = serde_json::from_str(json).unwrap();
        let paths: Vec<&str> = files.iter().map(DiffFile::path).collect();
        assert_eq!(paths, vec!["b.txt", "a.txt"]);
    }

    #[test]
    fn test_diff_file_without_head_file_is_an_error() {
        let json = r#"[{ "hunks": [] }]"#;
        assert!(serde_json::from_str::<Vec<DiffFile>>(json).is_err());
    }
}
