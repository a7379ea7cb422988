//! Error types for the GitLab client.

use std::fmt;
use thiserror::Error;

/// Result type alias for GitLab operations.
pub type GitLabResult<T> = Result<T, GitLabError>;

/// Error kinds for categorizing GitLab errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitLabErrorKind {
    // Configuration errors
    /// Invalid base URL.
    InvalidBaseUrl,
    /// Missing private token.
    MissingToken,
    /// Invalid configuration.
    InvalidConfiguration,

    // Capability errors (raised before any network I/O)
    /// Operation is disabled for the resource kind.
    NotSupported,
    /// Resource kind has no URL template.
    NotConfigured,
    /// URL template placeholder was not supplied.
    MissingParameter,

    // Network errors
    /// Transport could not reach the server.
    Connection,
    /// Non-200 status on a read operation (list or get).
    Get,
    /// Non-201 status on create.
    Create,
    /// Non-200 status on update.
    Update,

    // Response errors
    /// Failed to deserialize a success response.
    Deserialization,
}

impl fmt::Display for GitLabErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBaseUrl => write!(f, "invalid_base_url"),
            Self::MissingToken => write!(f, "missing_token"),
            Self::InvalidConfiguration => write!(f, "invalid_configuration"),
            Self::NotSupported => write!(f, "not_supported"),
            Self::NotConfigured => write!(f, "not_configured"),
            Self::MissingParameter => write!(f, "missing_parameter"),
            Self::Connection => write!(f, "connection"),
            Self::Get => write!(f, "get"),
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Deserialization => write!(f, "deserialization"),
        }
    }
}

/// GitLab API error with detailed information.
#[derive(Error, Debug)]
pub struct GitLabError {
    /// Error kind.
    kind: GitLabErrorKind,
    /// Error message.
    message: String,
    /// HTTP status code.
    status_code: Option<u16>,
    /// Raw response body.
    body: Option<String>,
    /// Underlying cause.
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for GitLabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(code) = self.status_code {
            write!(f, " (HTTP {})", code)?;
        }
        Ok(())
    }
}

impl GitLabError {
    /// Creates a new GitLab error.
    pub fn new(kind: GitLabErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            body: None,
            cause: None,
        }
    }

    /// Sets the HTTP status code.
    pub fn with_status(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Sets the raw response body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the underlying cause.
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Gets the error kind.
    pub fn kind(&self) -> GitLabErrorKind {
        self.kind
    }

    /// Gets the HTTP status code.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Gets the raw response body.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns true if the error was raised before any network I/O.
    pub fn is_capability_error(&self) -> bool {
        matches!(
            self.kind,
            GitLabErrorKind::NotSupported
                | GitLabErrorKind::NotConfigured
                | GitLabErrorKind::MissingParameter
        )
    }

    // Convenience constructors

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(GitLabErrorKind::InvalidConfiguration, message)
    }

    /// Creates a connection error naming the API root.
    pub fn connection(api_root: &str) -> Self {
        Self::new(
            GitLabErrorKind::Connection,
            format!("can't connect to GitLab server ({})", api_root),
        )
    }

    /// Creates a read-failure error from a non-200 response.
    pub fn get_failed(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::new(GitLabErrorKind::Get, format!("{}: {}", status, body))
            .with_status(status)
            .with_body(body)
    }

    /// Creates a create-failure error from a non-201 response.
    pub fn create_failed(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::new(GitLabErrorKind::Create, format!("{}: {}", status, body))
            .with_status(status)
            .with_body(body)
    }

    /// Creates an update-failure error from a non-200 response.
    pub fn update_failed(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::new(GitLabErrorKind::Update, format!("{}: {}", status, body))
            .with_status(status)
            .with_body(body)
    }

    /// Creates a not-supported error for a disabled operation.
    pub fn not_supported(resource: &str, operation: impl fmt::Display) -> Self {
        Self::new(
            GitLabErrorKind::NotSupported,
            format!("{} does not support {}", resource, operation),
        )
    }

    /// Creates a not-configured error for a resource without a URL template.
    pub fn not_configured(resource: &str) -> Self {
        Self::new(
            GitLabErrorKind::NotConfigured,
            format!("{} has no URL template", resource),
        )
    }

    /// Creates a missing-parameter error for an unfilled placeholder.
    pub fn missing_parameter(name: &str) -> Self {
        Self::new(
            GitLabErrorKind::MissingParameter,
            format!("missing value for URL placeholder '{}'", name),
        )
    }

    /// Creates a deserialization error.
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::new(GitLabErrorKind::Deserialization, message)
    }
}
