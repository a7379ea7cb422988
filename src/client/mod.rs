//! GitLab API client implementation.
//!
//! [`GitLabClient`] is the generic dispatcher: it holds the immutable
//! configuration and performs the five CRUD operations for any type
//! implementing [`Resource`], translating JSON payloads into typed values
//! and non-success responses into typed errors.

use crate::config::{GitLabConfig, GitLabConfigBuilder};
use crate::errors::{GitLabError, GitLabResult};
use crate::resources::{expand_path, Operation, Params, Resource};
use reqwest::header::USER_AGENT;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// GitLab API client.
pub struct GitLabClient {
    /// HTTP client.
    http: Client,
    /// Configuration.
    config: GitLabConfig,
    /// Cached `{base_url}/api/v3` prefix.
    api_root: String,
}

impl GitLabClient {
    /// Creates a new GitLab client.
    pub fn new(config: GitLabConfig) -> GitLabResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| {
                GitLabError::configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let api_root = config.api_root();

        Ok(Self {
            http,
            config,
            api_root,
        })
    }

    /// Creates a new client builder.
    pub fn builder() -> GitLabClientBuilder {
        GitLabClientBuilder::new()
    }

    /// Gets the instance base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Gets the API root URL (`{base_url}/api/v3`).
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    // Operations

    /// Lists all resources of a kind.
    ///
    /// Template placeholders in the kind's path are filled from `params`;
    /// leftover params become extra query parameters. A 200 response parses
    /// as a JSON array into items in source order; any other status fails
    /// with a get error carrying the status and body.
    pub async fn list<R: Resource>(&self, params: &Params) -> GitLabResult<Vec<R::Item>> {
        self.check::<R>(Operation::List)?;
        let url = self.endpoint_url::<R>(None, params)?;

        tracing::debug!(resource = R::NAME, path = url.path(), "list");
        let response = self.send(self.http.get(url)).await?;

        let status = response.status();
        let body = self.read_body(response).await?;
        if status != StatusCode::OK {
            return Err(GitLabError::get_failed(status.as_u16(), body));
        }
        parse_json(&body)
    }

    /// Gets a single resource by id.
    ///
    /// Same URL construction as [`Self::list`] with `/{id}` appended before
    /// the query string. A 200 response parses as one JSON object.
    pub async fn get<R: Resource>(&self, id: u64, params: &Params) -> GitLabResult<R::Item> {
        self.check::<R>(Operation::Get)?;
        let url = self.endpoint_url::<R>(Some(id), params)?;

        tracing::debug!(resource = R::NAME, path = url.path(), "get");
        let response = self.send(self.http.get(url)).await?;

        let status = response.status();
        let body = self.read_body(response).await?;
        if status != StatusCode::OK {
            return Err(GitLabError::get_failed(status.as_u16(), body));
        }
        parse_json(&body)
    }

    /// Creates a resource from form-encoded `data`.
    ///
    /// A 201 Created response parses as one JSON object; any other status
    /// fails with a create error carrying the status and body.
    pub async fn create<R, B>(&self, data: &B, params: &Params) -> GitLabResult<R::Item>
    where
        R: Resource,
        B: Serialize + ?Sized,
    {
        self.check::<R>(Operation::Create)?;
        let url = self.endpoint_url::<R>(None, params)?;

        tracing::debug!(resource = R::NAME, path = url.path(), "create");
        let response = self.send(self.http.post(url).form(data)).await?;

        let status = response.status();
        let body = self.read_body(response).await?;
        if status != StatusCode::CREATED {
            return Err(GitLabError::create_failed(status.as_u16(), body));
        }
        parse_json(&body)
    }

    /// Updates a resource by id from form-encoded `data`.
    ///
    /// A 200 response parses as one JSON object; any other status fails
    /// with an update error carrying the status and body.
    pub async fn update<R, B>(&self, id: u64, data: &B, params: &Params) -> GitLabResult<R::Item>
    where
        R: Resource,
        B: Serialize + ?Sized,
    {
        self.check::<R>(Operation::Update)?;
        let url = self.endpoint_url::<R>(Some(id), params)?;

        tracing::debug!(resource = R::NAME, path = url.path(), "update");
        let response = self.send(self.http.put(url).form(data)).await?;

        let status = response.status();
        let body = self.read_body(response).await?;
        if status != StatusCode::OK {
            return Err(GitLabError::update_failed(status.as_u16(), body));
        }
        parse_json(&body)
    }

    /// Deletes a resource by id.
    ///
    /// Returns `Ok(true)` iff the server answered 200 and `Ok(false)` for
    /// every other status. Known limitation carried over from the v3 API
    /// contract: the status code is swallowed, so a caller cannot tell a
    /// 404 from a 403 from a 500. Transport failures still error.
    pub async fn delete<R: Resource>(&self, id: u64, params: &Params) -> GitLabResult<bool> {
        self.check::<R>(Operation::Delete)?;
        let url = self.endpoint_url::<R>(Some(id), params)?;

        tracing::debug!(resource = R::NAME, path = url.path(), "delete");
        let response = self.send(self.http.delete(url)).await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(
                resource = R::NAME,
                status = status.as_u16(),
                "delete returned non-200"
            );
            return Ok(false);
        }
        Ok(true)
    }

    // Internal methods

    /// Gates an operation on the kind's descriptor. Runs before any
    /// network I/O; an unconfigured kind fails regardless of its flags.
    fn check<R: Resource>(&self, operation: Operation) -> GitLabResult<()> {
        if R::PATH.is_empty() {
            return Err(GitLabError::not_configured(R::NAME));
        }
        if !R::OPERATIONS.supports(operation) {
            return Err(GitLabError::not_supported(R::NAME, operation));
        }
        Ok(())
    }

    /// Builds the full request URL: expanded template, optional `/{id}`
    /// suffix, then `private_token` followed by leftover params as query
    /// parameters.
    fn endpoint_url<R: Resource>(&self, id: Option<u64>, params: &Params) -> GitLabResult<Url> {
        let (mut path, leftover) = expand_path(R::PATH, params)?;
        if let Some(id) = id {
            path.push_str(&format!("/{}", id));
        }

        let mut url = Url::parse(&format!("{}{}", self.api_root, path)).map_err(|e| {
            GitLabError::configuration(format!("Failed to build URL for {}: {}", R::NAME, e))
        })?;

        let mut pairs: Vec<(&str, &str)> =
            vec![("private_token", self.config.private_token.expose_secret())];
        pairs.extend(leftover.iter());
        let query = serde_urlencoded::to_string(&pairs).map_err(|e| {
            GitLabError::configuration(format!("Failed to encode query parameters: {}", e))
        })?;
        url.set_query(Some(&query));

        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> GitLabResult<Response> {
        request
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .await
            .map_err(|e| GitLabError::connection(&self.api_root).with_cause(e))
    }

    async fn read_body(&self, response: Response) -> GitLabResult<String> {
        response
            .text()
            .await
            .map_err(|e| GitLabError::connection(&self.api_root).with_cause(e))
    }
}

fn parse_json<T: DeserializeOwned>(body: &str) -> GitLabResult<T> {
    serde_json::from_str(body)
        .map_err(|e| GitLabError::deserialization(format!("Failed to deserialize response: {}", e)))
}

/// Builder for GitLabClient.
pub struct GitLabClientBuilder {
    config_builder: GitLabConfigBuilder,
}

impl GitLabClientBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            config_builder: GitLabConfig::builder(),
        }
    }

    /// Sets the instance base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(url);
        self
    }

    /// Sets the private token.
    pub fn private_token(mut self, token: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.private_token(token);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.connect_timeout(timeout);
        self
    }

    /// Sets the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.user_agent(ua);
        self
    }

    /// Builds the client.
    pub fn build(self) -> GitLabResult<GitLabClient> {
        let config = self.config_builder.build()?;
        GitLabClient::new(config)
    }
}

impl Default for GitLabClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
