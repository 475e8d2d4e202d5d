//! branch-scout - a blocking GitHub REST client for inspecting branches
//!
//! Fetches branches, recent commits, pull request metadata and changed file
//! sets for branches and pull requests.

pub mod config;
pub mod constants;
pub mod github;
pub mod logging;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use config::{ClientConfig, ConfigError, Settings};
pub use github::{ApiError, ApiResult, FileChangeSet, GitHubClient};
