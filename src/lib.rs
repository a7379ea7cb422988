//! # GitLab Integration Library
//!
//! A typed client for the GitLab REST API v3:
//! - Declarative per-resource descriptors (URL template, permitted
//!   operations, return-as overrides, nested typing)
//! - One generic dispatcher for list / get / create / update / delete
//! - Typed errors carrying the HTTP status code and raw response body
//! - Static private-token authentication (`private_token` query parameter)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_gitlab::{GitLabClient, Params, Project, ProjectIssue};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GitLabClient::builder()
//!         .base_url("http://gitlab.example.com")
//!         .private_token("JVNSESs8EwWRx5yDxM5q")
//!         .build()?;
//!
//!     // List projects, then close every issue in each of them.
//!     for project in client.list::<Project>(&Params::new()).await? {
//!         let Some(project_id) = project.id else { continue };
//!         let params = Params::new().set("project_id", project_id);
//!         for issue in client.list::<ProjectIssue>(&params).await? {
//!             if let Some(issue_id) = issue.id {
//!                 client
//!                     .update::<ProjectIssue, _>(issue_id, &[("closed", "1")], &params)
//!                     .await?;
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod errors;
pub mod types;

// HTTP client and transport
pub mod client;

// Resource descriptors
pub mod resources;

// Re-exports for convenience
pub use client::{GitLabClient, GitLabClientBuilder};
pub use config::{GitLabConfig, GitLabConfigBuilder};
pub use errors::{GitLabError, GitLabErrorKind, GitLabResult};
pub use resources::{Operation, Operations, Params, Resource};
pub use types::*;
