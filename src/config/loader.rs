//! Settings file loading and environment lookup

use super::{ClientConfig, ClientConfigBuilder, ConfigError};
use crate::constants::{config as keys, exit};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::Level;

/// Optional settings read from a YAML file
///
/// ```yaml
/// api_base: https://github.example.com/api/v3
/// user_agent: release-bot/1.0
/// ```
///
/// The token is deliberately not part of the file; it only comes from the
/// environment or from the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty file is a valid, empty document
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings if the file exists, otherwise return defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load `branch-scout.yaml` from the working directory, if present
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_or_default(keys::DEFAULT_SETTINGS_FILE)
    }
}

impl ClientConfig {
    /// Build a configuration from the process environment
    ///
    /// Reads `GITHUB_TOKEN` (required) and `GITHUB_API_URL` (optional).
    ///
    /// # Errors
    /// [`ConfigError::MissingToken`] when `GITHUB_TOKEN` is unset,
    /// [`ConfigError::EmptyToken`] when it is blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] over an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::builder_from_lookup(lookup)?.build()
    }

    /// Environment lookup that also applies a settings file
    ///
    /// The environment's `GITHUB_API_URL` takes precedence over the file.
    pub fn from_env_with_settings(settings: &Settings) -> Result<Self, ConfigError> {
        Self::builder_from_lookup(|key| std::env::var(key).ok())?
            .with_settings(settings)
            .build()
    }

    /// Process startup entry point
    ///
    /// Logs an error and exits with a non-zero code when the token is
    /// missing, before any request can be made. When the process has no
    /// subscriber yet, the default stderr one from [`crate::logging::init`]
    /// is installed first so the message is never dropped.
    ///
    /// # Returns
    /// The configuration read from the environment. Never returns on failure.
    ///
    /// # Example
    /// ```rust,no_run
    /// use branch_scout::config::ClientConfig;
    /// use branch_scout::github::GitHubClient;
    ///
    /// let client = GitHubClient::new(ClientConfig::from_env_or_exit());
    /// ```
    pub fn from_env_or_exit() -> Self {
        match Self::from_env() {
            Ok(config) => config,
            Err(error) => {
                if !tracing::dispatcher::has_been_set() {
                    let _ = crate::logging::init(Level::ERROR);
                }
                tracing::error!(%error, "{}. Exiting.", error);
                std::process::exit(exit::MISSING_CREDENTIAL);
            }
        }
    }

    fn builder_from_lookup<F>(lookup: F) -> Result<ClientConfigBuilder, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(keys::TOKEN_ENV_VAR).ok_or_else(|| ConfigError::MissingToken {
            var: keys::TOKEN_ENV_VAR.to_string(),
        })?;

        let mut builder = ClientConfigBuilder::new(token);
        if let Some(api_base) = lookup(keys::API_BASE_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            builder = builder.with_api_base(api_base);
        }
        Ok(builder)
    }
}
