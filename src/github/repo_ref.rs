//! Repository references parsed from remote URLs

use crate::Result;
use anyhow::anyhow;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static SSH_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^git@([^:]+):([^/]+)/([^/]+)$").expect("valid regex"));
static HTTPS_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://([^/]+)/([^/]+)/([^/]+)$").expect("valid regex"));
static LEGACY_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com[:/]([^/]+)/([^/]+)$").expect("valid regex"));

/// Owner and name of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parse a clone URL, see [`parse_github_url`]
    pub fn parse(url: &str) -> Result<Self> {
        let (owner, repo) = parse_github_url(url)?;
        Ok(Self { owner, repo })
    }
}

impl FromStr for RepoRef {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Parse a GitHub URL into `(owner, repository_name)`
///
/// Supports github.com and enterprise hosts:
/// - SSH: `git@github.com:owner/repo` or `git@github-enterprise:owner/repo`
/// - HTTPS: `https://github.com/owner/repo` or `https://github-enterprise/owner/repo`
/// - Legacy: `github.com/owner/repo`
///
/// A trailing `/` and `.git` suffix are ignored.
///
/// # Errors
/// Returns an error if the URL format is not recognized
pub fn parse_github_url(url: &str) -> Result<(String, String)> {
    let url = url.trim().trim_end_matches('/').trim_end_matches(".git");

    for (pattern, owner_group) in [(&*SSH_URL, 2), (&*HTTPS_URL, 2), (&*LEGACY_URL, 1)] {
        if let Some(captures) = pattern.captures(url) {
            let owner = &captures[owner_group];
            let repo = &captures[owner_group + 1];
            return Ok((owner.to_string(), repo.to_string()));
        }
    }

    Err(anyhow!("Invalid GitHub URL format: {}", url))
}
