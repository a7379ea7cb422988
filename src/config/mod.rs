//! Configuration types for the GitLab client.

use crate::errors::{GitLabError, GitLabErrorKind};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Path prefix of the v3 API, appended to the instance base URL.
pub const API_PATH: &str = "/api/v3";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent header.
pub const DEFAULT_USER_AGENT: &str = "integrations-gitlab/0.1.0";

/// GitLab client configuration.
#[derive(Debug, Clone)]
pub struct GitLabConfig {
    /// Instance base URL, e.g. `http://gitlab.example.com`.
    pub base_url: String,
    /// Private token, sent as the `private_token` query parameter.
    pub private_token: SecretString,
    /// Request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// User-Agent header.
    pub user_agent: String,
}

impl GitLabConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> GitLabConfigBuilder {
        GitLabConfigBuilder::new()
    }

    /// Returns the API root URL (`{base_url}/api/v3`).
    pub fn api_root(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), API_PATH)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GitLabError> {
        if self.base_url.is_empty() {
            return Err(GitLabError::new(
                GitLabErrorKind::InvalidBaseUrl,
                "Base URL cannot be empty",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(GitLabError::new(
                GitLabErrorKind::InvalidBaseUrl,
                "Base URL must start with http:// or https://",
            ));
        }

        if let Err(e) = Url::parse(&self.base_url) {
            return Err(GitLabError::new(
                GitLabErrorKind::InvalidBaseUrl,
                format!("Base URL is not a valid URL: {}", e),
            ));
        }

        if self.private_token.expose_secret().is_empty() {
            return Err(GitLabError::new(
                GitLabErrorKind::MissingToken,
                "Private token is required",
            ));
        }

        if self.user_agent.is_empty() {
            return Err(GitLabError::configuration("User-Agent cannot be empty"));
        }

        Ok(())
    }
}

/// Builder for GitLabConfig.
#[derive(Debug, Default)]
pub struct GitLabConfigBuilder {
    base_url: Option<String>,
    private_token: Option<SecretString>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl GitLabConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the instance base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the private token.
    pub fn private_token(mut self, token: impl Into<String>) -> Self {
        self.private_token = Some(SecretString::new(token.into()));
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Result<GitLabConfig, GitLabError> {
        let config = GitLabConfig {
            base_url: self.base_url.unwrap_or_default(),
            private_token: self
                .private_token
                .unwrap_or_else(|| SecretString::new(String::new())),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            user_agent: self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        };

        config.validate()?;
        Ok(config)
    }
}
