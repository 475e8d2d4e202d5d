//! GitHub branch API operations
//!
//! Listing the branches of a repository and comparing two of them.

use super::client::GitHubClient;
use super::error::ApiResult;
use super::files::collect_filenames;
use super::transport::Transport;
use super::types::{Branch, FileChangeSet};

impl<T: Transport> GitHubClient<T> {
    /// List the branches of a repository
    ///
    /// `GET /repos/{owner}/{repo}/branches`. Branches come back in the order
    /// the API returns them.
    pub fn try_list_branches(&self, owner: &str, repo: &str) -> ApiResult<Vec<Branch>> {
        let url = self.endpoint(["repos", owner, repo, "branches"]);
        self.try_request_as(&url)
    }

    /// List the branches of a repository, or `None` if the request fails
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    ///
    /// # Returns
    /// The branches in API order. Any failure has been logged and is `None`;
    /// use [`try_list_branches`](Self::try_list_branches) to see the cause.
    ///
    /// # Example
    /// ```rust,no_run
    /// use branch_scout::config::ClientConfig;
    /// use branch_scout::github::GitHubClient;
    ///
    /// let client = GitHubClient::new(ClientConfig::from_env_or_exit());
    /// for branch in client.list_branches("octocat", "Hello-World").unwrap_or_default() {
    ///     println!("{} at {}", branch.name, branch.commit.sha);
    /// }
    /// ```
    pub fn list_branches(&self, owner: &str, repo: &str) -> Option<Vec<Branch>> {
        self.try_list_branches(owner, repo).ok()
    }

    /// Files changed between two branches
    ///
    /// `GET /repos/{owner}/{repo}/compare/{base}...{target}`. A response
    /// without a `files` list is an empty set.
    pub fn try_compare_branches(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        target: &str,
    ) -> ApiResult<FileChangeSet> {
        let range = format!("{}...{}", base, target);
        let url = self.endpoint(["repos", owner, repo, "compare", range.as_str()]);
        let comparison = self.try_request(&url)?;
        Ok(comparison
            .get("files")
            .map(|files| collect_filenames(files, url.as_str()))
            .unwrap_or_default())
    }

    /// Files changed between two branches, or an empty set if the request fails
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    /// * `base` - Branch the comparison starts from
    /// * `target` - Branch compared against `base`
    ///
    /// # Returns
    /// The distinct filenames touched between `base` and `target`. A failed
    /// request is logged and yields an empty set, never `None`.
    ///
    /// # Example
    /// ```rust,no_run
    /// use branch_scout::config::ClientConfig;
    /// use branch_scout::github::GitHubClient;
    ///
    /// let client = GitHubClient::new(ClientConfig::from_env_or_exit());
    /// let changed = client.compare_branches("octocat", "Hello-World", "main", "feature/login");
    /// if changed.contains("Cargo.toml") {
    ///     println!("dependencies changed");
    /// }
    /// ```
    pub fn compare_branches(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        target: &str,
    ) -> FileChangeSet {
        self.try_compare_branches(owner, repo, base, target)
            .unwrap_or_default()
    }
}
