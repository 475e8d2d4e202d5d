//! Configuration management module
//!
//! The client never reads global state on its own. A [`ClientConfig`] is built
//! once at startup (usually through [`ClientConfig::from_env`]) and handed to
//! [`GitHubClient::new`](crate::github::GitHubClient::new).

pub mod builder;
pub mod loader;
pub mod validation;

pub use builder::ClientConfigBuilder;
pub use loader::Settings;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

/// Errors raised while assembling a [`ClientConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} not found")]
    MissingToken { var: String },

    #[error("GitHub token cannot be empty")]
    EmptyToken,

    #[error("invalid GitHub API base URL '{value}': {reason}")]
    InvalidApiBase { value: String, reason: String },

    #[error("failed to read settings file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Everything the API client needs to issue requests
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub(crate) token: String,
    pub(crate) api_base: Url,
    pub(crate) user_agent: String,
}

impl ClientConfig {
    /// Start building a configuration around an API token
    pub fn builder(token: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder::new(token)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Value of the `Authorization` header
    pub fn auth_header(&self) -> String {
        format!(
            "{} {}",
            crate::constants::github::AUTH_SCHEME,
            self.token
        )
    }
}

// Keep the token out of logs and panic messages.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("api_base", &self.api_base.as_str())
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
