//! GitHub API client implementation
//!
//! This module provides the `GitHubClient` struct, the entry point for all
//! API operations. The client owns its configuration and transport; the
//! endpoint modules extend it with `impl` blocks:
//! - `branches.rs` - branch listing and comparison
//! - `commits.rs` - recent commits on a branch
//! - `pull_requests.rs` - pull request lookup and changed files
//!
//! Every operation goes through [`GitHubClient::try_request`], which performs
//! exactly one GET and only accepts status 200.

use super::error::{ApiError, ApiResult};
use super::transport::{ReqwestTransport, Transport};
use crate::config::ClientConfig;
use crate::constants::github::{ACCEPT, SUCCESS_STATUS};
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Blocking GitHub REST API client
///
/// ## Example
///
/// ```rust,no_run
/// use branch_scout::config::ClientConfig;
/// use branch_scout::github::GitHubClient;
///
/// let config = ClientConfig::from_env_or_exit();
/// let client = GitHubClient::new(config);
///
/// if let Some(branches) = client.list_branches("rust-lang", "rust") {
///     for branch in branches {
///         println!("{}", branch.name);
///     }
/// }
/// ```
pub struct GitHubClient<T = ReqwestTransport> {
    pub(crate) config: ClientConfig,
    pub(crate) transport: T,
}

impl GitHubClient<ReqwestTransport> {
    /// Create a client that talks to the network through reqwest
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> GitHubClient<T> {
    /// Create a client over a custom transport
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build an endpoint URL from raw path segments
    ///
    /// Each segment is percent-encoded on its own, so a `/` inside a branch
    /// name cannot introduce extra path components.
    pub fn endpoint<I, S>(&self, segments: I) -> Url
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url = self.config.api_base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Like [`endpoint`](Self::endpoint), with form-encoded query parameters
    pub fn endpoint_with_query<I, S>(&self, segments: I, query: &[(&str, &str)]) -> Url
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url = self.endpoint(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }

    fn headers(&self, url: &Url) -> ApiResult<HeaderMap> {
        let invalid = |what: &str| ApiError::Transport {
            url: url.to_string(),
            message: format!("invalid {} header value", what),
        };

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&self.config.auth_header())
            .map_err(|_| invalid("Authorization"))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_str(&self.config.user_agent).map_err(|_| invalid("User-Agent"))?,
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
        Ok(headers)
    }

    /// Perform an authenticated GET and parse the JSON body
    ///
    /// # Errors
    /// - [`ApiError::Status`] for any status other than 200
    /// - [`ApiError::Transport`] when no response was received
    /// - [`ApiError::Decode`] when a 200 body is not valid JSON
    pub fn try_request(&self, url: &Url) -> ApiResult<Value> {
        let result = self.send(url);
        if let Err(error) = &result {
            match error {
                ApiError::Status { status, .. } => {
                    tracing::error!(url = %url, status, "Failed to fetch data from {}: {}", url, status);
                }
                ApiError::Transport { message, .. } | ApiError::Decode { message, .. } => {
                    tracing::error!(url = %url, error = %message, "Failed to fetch data from {}: {}", url, message);
                }
            }
        }
        result
    }

    fn send(&self, url: &Url) -> ApiResult<Value> {
        let headers = self.headers(url)?;
        let response = self
            .transport
            .get(url, &headers)
            .map_err(|e| ApiError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if response.status != SUCCESS_STATUS {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        let value = serde_json::from_str(&response.body).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(url = %url, "Successful response from {}", url);
        Ok(value)
    }

    /// Perform an authenticated GET, collapsing every failure to `None`
    ///
    /// The failure has already been logged by the time `None` is returned.
    pub fn request(&self, url: &Url) -> Option<Value> {
        self.try_request(url).ok()
    }

    /// Request a URL and deserialize the body into `R`
    pub(crate) fn try_request_as<R: DeserializeOwned>(&self, url: &Url) -> ApiResult<R> {
        let value = self.try_request(url)?;
        Self::decode(url, value)
    }

    /// Deserialize a value already fetched from `url`
    pub(crate) fn decode<R: DeserializeOwned>(url: &Url, value: Value) -> ApiResult<R> {
        serde_json::from_value(value).map_err(|e| {
            tracing::error!(url = %url, error = %e, "Unexpected response shape from {}", url);
            ApiError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            }
        })
    }
}
