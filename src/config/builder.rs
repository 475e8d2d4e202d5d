//! Client configuration builder

use super::validation;
use super::{ClientConfig, ConfigError, Settings};
use crate::constants::github::{API_BASE, DEFAULT_USER_AGENT};

/// Builder for [`ClientConfig`]
///
/// The token is mandatory; the API base defaults to `https://api.github.com`
/// and the user agent to `branch-scout/<version>`.
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    token: String,
    api_base: Option<String>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_base: None,
            user_agent: None,
        }
    }

    /// Point the client at a different API host, e.g. GitHub Enterprise
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Apply values from a settings file. Explicitly set values win.
    pub fn with_settings(mut self, settings: &Settings) -> Self {
        if self.api_base.is_none() {
            self.api_base = settings.api_base.clone();
        }
        if self.user_agent.is_none() {
            self.user_agent = settings.user_agent.clone();
        }
        self
    }

    /// Validate and build the configuration
    ///
    /// # Errors
    /// Returns an error if the token is blank or the API base is not an
    /// absolute http(s) URL.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let token = validation::validate_token(&self.token)?;
        let api_base = validation::validate_api_base(self.api_base.as_deref().unwrap_or(API_BASE))?;
        let user_agent = self
            .user_agent
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Ok(ClientConfig {
            token,
            api_base,
            user_agent,
        })
    }
}
