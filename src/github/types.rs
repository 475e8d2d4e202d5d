//! GitHub API types
//!
//! Only the fields this crate reads are modelled. Anything else in a response
//! body is ignored during deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A branch as returned by `GET /repos/{owner}/{repo}/branches`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub commit: BranchCommit,
    #[serde(default)]
    pub protected: bool,
}

/// Commit pointer embedded in a [`Branch`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchCommit {
    pub sha: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// A commit as returned by `GET /repos/{owner}/{repo}/commits`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub commit: CommitDetails,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl Commit {
    /// First line of the commit message
    pub fn summary(&self) -> &str {
        self.commit.message.lines().next().unwrap_or("")
    }

    /// Author timestamp, when GitHub reported one
    pub fn authored_at(&self) -> Option<DateTime<Utc>> {
        self.commit.author.as_ref().and_then(|author| author.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitDetails {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author: Option<GitActor>,
}

/// Git-level author identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitActor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// A pull request as returned by `GET /repos/{owner}/{repo}/pulls`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub state: String,
    pub head: PullRequestRef,
    #[serde(default)]
    pub base: Option<PullRequestRef>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl PullRequest {
    pub fn is_open(&self) -> bool {
        self.state == "open"
    }
}

/// Head or base of a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub sha: String,
}

/// Set of file paths touched by a pull request or a branch comparison
///
/// Duplicates collapse; iteration is in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileChangeSet(BTreeSet<String>);

impl FileChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, filename: impl Into<String>) -> bool {
        self.0.insert(filename.into())
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.0.contains(filename)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_inner(self) -> BTreeSet<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for FileChangeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for FileChangeSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FileChangeSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_branch_ignores_unknown_fields() {
        let value = json!({
            "name": "main",
            "commit": {"sha": "abc123", "url": "https://api.github.com/repos/o/r/commits/abc123"},
            "protected": true,
            "protection_url": "https://api.github.com/repos/o/r/branches/main/protection"
        });
        let branch: Branch = serde_json::from_value(value).unwrap();
        assert_eq!(branch.name, "main");
        assert_eq!(branch.commit.sha, "abc123");
        assert!(branch.protected);
    }

    #[test]
    fn test_branch_protected_defaults_to_false() {
        let value = json!({"name": "dev", "commit": {"sha": "def"}});
        let branch: Branch = serde_json::from_value(value).unwrap();
        assert!(!branch.protected);
        assert_eq!(branch.commit.url, None);
    }

    #[test]
    fn test_commit_summary_and_date() {
        let value = json!({
            "sha": "abc",
            "commit": {
                "message": "Fix parser\n\nLonger description",
                "author": {"name": "Octo Cat", "email": "octo@example.com", "date": "2024-03-01T12:30:00Z"}
            }
        });
        let commit: Commit = serde_json::from_value(value).unwrap();
        assert_eq!(commit.summary(), "Fix parser");
        let date = commit.authored_at().unwrap();
        assert_eq!(date.to_rfc3339(), "2024-03-01T12:30:00+00:00");
    }

    #[test]
    fn test_commit_without_author() {
        let value = json!({"sha": "abc", "commit": {"message": ""}});
        let commit: Commit = serde_json::from_value(value).unwrap();
        assert_eq!(commit.summary(), "");
        assert!(commit.authored_at().is_none());
    }

    #[test]
    fn test_pull_request_head_ref_rename() {
        let value = json!({
            "number": 42,
            "state": "open",
            "head": {"ref": "feature-x", "sha": "abc"},
            "base": {"ref": "main", "sha": "def"}
        });
        let pr: PullRequest = serde_json::from_value(value).unwrap();
        assert_eq!(pr.number, 42);
        assert_eq!(pr.head.ref_name, "feature-x");
        assert_eq!(pr.base.unwrap().ref_name, "main");
    }

    #[test]
    fn test_pull_request_is_open() {
        let value = json!({"number": 1, "state": "closed", "head": {"ref": "x", "sha": "y"}});
        let pr: PullRequest = serde_json::from_value(value).unwrap();
        assert!(!pr.is_open());
    }

    #[test]
    fn test_file_change_set_collapses_duplicates() {
        let files: FileChangeSet = ["a.py", "a.py", "b.py"].into_iter().collect();
        assert_eq!(files.len(), 2);
        assert!(files.contains("a.py"));
        assert!(files.contains("b.py"));
        assert_eq!(files.iter().collect::<Vec<_>>(), vec!["a.py", "b.py"]);
    }

    #[test]
    fn test_file_change_set_serializes_as_array() {
        let files: FileChangeSet = ["z.md", "a.md"].into_iter().collect();
        assert_eq!(serde_json::to_value(&files).unwrap(), json!(["a.md", "z.md"]));
    }
}
