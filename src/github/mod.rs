//! GitHub API integration module
//!
//! A blocking client for the handful of read-only endpoints needed to inspect
//! branches and their pull requests.
//!
//! ## Architecture
//!
//! - [`client`]: Core client, header handling and the single request path
//! - [`transport`]: HTTP transport trait and its reqwest implementation
//! - [`branches`]: Branch listing and branch comparison
//! - [`commits`]: Recent commits on a branch
//! - [`pull_requests`]: Pull request lookup and changed files
//! - [`types`]: Data structures returned by the operations
//! - [`error`]: Request failure type
//! - [`repo_ref`]: Owner/repository parsing from clone URLs
//!
//! ## Failure handling
//!
//! Each operation has a `try_*` form returning [`ApiResult`], and a plain
//! form that collapses failures: `Option` for branches, commits, pull
//! requests and raw requests, an empty [`FileChangeSet`] for file lists.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use branch_scout::config::ClientConfig;
//! use branch_scout::github::GitHubClient;
//!
//! let client = GitHubClient::new(ClientConfig::from_env_or_exit());
//!
//! if let Some(pr) = client.find_pull_request_for_branch("octo", "hello", "feature-x") {
//!     let files = client.list_pull_request_files("octo", "hello", pr.number);
//!     println!("#{} touches {} files", pr.number, files.len());
//! }
//! ```

pub mod branches;
pub mod client;
pub mod commits;
pub mod error;
mod files;
pub mod pull_requests;
pub mod repo_ref;
pub mod transport;
pub mod types;

pub use client::GitHubClient;
pub use error::{ApiError, ApiResult};
pub use repo_ref::{RepoRef, parse_github_url};
pub use transport::{HttpResponse, ReqwestTransport, Transport, TransportError};
pub use types::{
    Branch, BranchCommit, Commit, CommitDetails, FileChangeSet, GitActor, PullRequest,
    PullRequestRef,
};

pub use crate::constants::github::{API_BASE, DEFAULT_USER_AGENT};
