//! Configuration validation utilities

use super::ConfigError;
use url::Url;

/// Validate an API token, returning it trimmed
pub fn validate_token(token: &str) -> Result<String, ConfigError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ConfigError::EmptyToken);
    }
    Ok(token.to_string())
}

/// Parse and check the API base URL
///
/// The URL must be absolute, use http or https, and be able to carry path
/// segments. A trailing slash is dropped so endpoint paths join cleanly.
pub fn validate_api_base(value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidApiBase {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let mut url = Url::parse(value.trim()).map_err(|e| invalid(&e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot carry a path"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("URL must not contain a query or fragment"));
    }

    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty();
    }

    Ok(url)
}
