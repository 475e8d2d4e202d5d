//! GitHub Pull Request API operations
//!
//! Looking up the pull request opened from a branch and listing the files a
//! pull request touches.

use super::client::GitHubClient;
use super::error::ApiResult;
use super::files::collect_filenames;
use super::transport::Transport;
use super::types::{FileChangeSet, PullRequest};
use crate::constants::github::PULL_REQUEST_STATE;
use serde_json::Value;

impl<T: Transport> GitHubClient<T> {
    /// Find the pull request whose head is `owner:branch`
    ///
    /// `GET /repos/{owner}/{repo}/pulls?state=all&head={owner}:{branch}`.
    /// Open and closed pull requests both match. When several come back the
    /// first one in API order wins; an empty list is `Ok(None)`.
    pub fn try_find_pull_request_for_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> ApiResult<Option<PullRequest>> {
        let head = format!("{}:{}", owner, branch);
        let url = self.endpoint_with_query(
            ["repos", owner, repo, "pulls"],
            &[("state", PULL_REQUEST_STATE), ("head", head.as_str())],
        );
        // Only the first entry is decoded; later ones may have any shape.
        let pulls: Vec<Value> = self.try_request_as(&url)?;
        pulls
            .into_iter()
            .next()
            .map(|first| Self::decode(&url, first))
            .transpose()
    }

    /// The branch's pull request, or `None` if there is none or the request fails
    ///
    /// # Arguments
    /// * `owner` - Repository owner; also the owner half of the `head` filter
    /// * `repo` - Repository name
    /// * `branch` - Head branch of the pull request
    ///
    /// # Returns
    /// The first matching pull request, open or closed. An empty result and
    /// a failed request are both `None`.
    ///
    /// # Example
    /// ```rust,no_run
    /// use branch_scout::config::ClientConfig;
    /// use branch_scout::github::GitHubClient;
    ///
    /// let client = GitHubClient::new(ClientConfig::from_env_or_exit());
    /// if let Some(pr) = client.find_pull_request_for_branch("octocat", "Hello-World", "feature-x") {
    ///     println!("#{} is {}", pr.number, pr.state);
    /// }
    /// ```
    pub fn find_pull_request_for_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Option<PullRequest> {
        self.try_find_pull_request_for_branch(owner, repo, branch)
            .ok()
            .flatten()
    }

    /// Files modified in a pull request
    ///
    /// `GET /repos/{owner}/{repo}/pulls/{pr_number}/files`
    pub fn try_list_pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> ApiResult<FileChangeSet> {
        let number = pr_number.to_string();
        let url = self.endpoint(["repos", owner, repo, "pulls", number.as_str(), "files"]);
        let entries = self.try_request(&url)?;
        Ok(collect_filenames(&entries, url.as_str()))
    }

    /// Files modified in a pull request, or an empty set if the request fails
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    ///
    /// # Returns
    /// The distinct filenames the pull request touches. A failed request is
    /// logged and yields an empty set.
    ///
    /// # Example
    /// ```rust,no_run
    /// use branch_scout::config::ClientConfig;
    /// use branch_scout::github::GitHubClient;
    ///
    /// let client = GitHubClient::new(ClientConfig::from_env_or_exit());
    /// for file in client.list_pull_request_files("octocat", "Hello-World", 42).iter() {
    ///     println!("{}", file);
    /// }
    /// ```
    pub fn list_pull_request_files(&self, owner: &str, repo: &str, pr_number: u64) -> FileChangeSet {
        self.try_list_pull_request_files(owner, repo, pr_number)
            .unwrap_or_default()
    }
}
