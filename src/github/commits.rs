//! GitHub commit API operations

use super::client::GitHubClient;
use super::error::ApiResult;
use super::transport::Transport;
use super::types::Commit;
use crate::constants::github::RECENT_COMMITS_PER_PAGE;

impl<T: Transport> GitHubClient<T> {
    /// The latest commits on a branch, most recent first
    ///
    /// `GET /repos/{owner}/{repo}/commits?sha={branch}&per_page=5`. At most
    /// five commits are returned no matter how long the branch is.
    pub fn try_list_recent_commits(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> ApiResult<Vec<Commit>> {
        let per_page = RECENT_COMMITS_PER_PAGE.to_string();
        let url = self.endpoint_with_query(
            ["repos", owner, repo, "commits"],
            &[("sha", branch), ("per_page", per_page.as_str())],
        );
        self.try_request_as(&url)
    }

    /// The latest five commits on a branch, or `None` if the request fails
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    /// * `branch` - Branch name (or any ref) to start from
    ///
    /// # Returns
    /// Up to five commits, most recent first. Failures are logged and
    /// collapsed to `None`.
    ///
    /// # Example
    /// ```rust,no_run
    /// use branch_scout::config::ClientConfig;
    /// use branch_scout::github::GitHubClient;
    ///
    /// let client = GitHubClient::new(ClientConfig::from_env_or_exit());
    /// if let Some(commits) = client.list_recent_commits("octocat", "Hello-World", "main") {
    ///     for commit in commits {
    ///         println!("{} {}", commit.sha, commit.summary());
    ///     }
    /// }
    /// ```
    pub fn list_recent_commits(&self, owner: &str, repo: &str, branch: &str) -> Option<Vec<Commit>> {
        self.try_list_recent_commits(owner, repo, branch).ok()
    }
}
