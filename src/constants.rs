//! Central constants for branch-scout

/// Fixed values for GitHub API requests
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("branch-scout/", env!("CARGO_PKG_VERSION"));

    /// Accept header sent with every request
    pub const ACCEPT: &str = "application/vnd.github.v3+json";

    /// Scheme prefix used in the Authorization header
    pub const AUTH_SCHEME: &str = "token";

    /// Number of commits requested by `list_recent_commits`
    pub const RECENT_COMMITS_PER_PAGE: u32 = 5;

    /// Pull request state filter used when looking up a branch's pull request
    pub const PULL_REQUEST_STATE: &str = "all";

    /// The only status code treated as success
    pub const SUCCESS_STATUS: u16 = 200;
}

/// Default values for configuration
pub mod config {
    /// Environment variable holding the API token
    pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

    /// Environment variable overriding the API base URL
    pub const API_BASE_ENV_VAR: &str = "GITHUB_API_URL";

    /// Default settings file name
    pub const DEFAULT_SETTINGS_FILE: &str = "branch-scout.yaml";
}

/// Process exit codes
pub mod exit {
    /// Exit code used when the API token is missing at startup
    pub const MISSING_CREDENTIAL: i32 = 1;
}
