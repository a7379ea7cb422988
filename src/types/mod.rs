//! Typed resource kinds for the GitLab API v3.
//!
//! One struct per resource kind, fields matching the v3 schema. Every field
//! is optional: instances mirror exactly the keys present in the response
//! JSON, with no required-field enforcement. Keys not modeled here land in
//! the `extra` map. Nested objects (a project's owner, a merge request's
//! author) deserialize into their own typed kinds.

use crate::resources::{Operations, Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A GitLab user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: Option<u64>,
    /// Username.
    pub username: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Account state.
    pub state: Option<String>,
    /// Profile bio.
    pub bio: Option<String>,
    /// Whether the account is blocked.
    pub blocked: Option<bool>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Response keys not modeled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Resource for User {
    const NAME: &'static str = "user";
    const PATH: &'static str = "/users";
    type Item = Self;
}

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User ID.
    pub id: Option<u64>,
    /// Username.
    pub username: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Whether the user is an administrator.
    pub is_admin: Option<bool>,
    /// Whether the user may create groups.
    pub can_create_group: Option<bool>,
    /// Whether the user may create projects.
    pub can_create_project: Option<bool>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Response keys not modeled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Resource for CurrentUser {
    const NAME: &'static str = "current user";
    const PATH: &'static str = "/user";
    const OPERATIONS: Operations = Operations::NONE.with_get();
    type Item = Self;
}

/// An SSH key of the authenticated user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentUserKey {
    /// Key ID.
    pub id: Option<u64>,
    /// Key title.
    pub title: Option<String>,
    /// Public key material.
    pub key: Option<String>,
    /// Response keys not modeled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Resource for CurrentUserKey {
    const NAME: &'static str = "current user key";
    const PATH: &'static str = "/user/keys";
    const OPERATIONS: Operations = Operations::ALL.without_update();
    type Item = Self;
}

/// A project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Project {
    /// Project ID.
    pub id: Option<u64>,
    /// Project name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Default branch.
    pub default_branch: Option<String>,
    /// Owning user.
    pub owner: Option<User>,
    /// Path component.
    pub path: Option<String>,
    /// Namespaced path (namespace/path).
    pub path_with_namespace: Option<String>,
    /// Whether the issue tracker is enabled.
    pub issues_enabled: Option<bool>,
    /// Whether merge requests are enabled.
    pub merge_requests_enabled: Option<bool>,
    /// Whether the wall is enabled.
    pub wall_enabled: Option<bool>,
    /// Whether the wiki is enabled.
    pub wiki_enabled: Option<bool>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Response keys not modeled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Resource for Project {
    const NAME: &'static str = "project";
    const PATH: &'static str = "/projects";
    const OPERATIONS: Operations = Operations::ALL.without_update().without_delete();
    type Item = Self;
}

/// A project member. Responses carry plain user objects, so this kind is
/// descriptor-only and its operations yield [`User`] values.
#[derive(Debug, Clone, Copy)]
pub struct ProjectMember;

impl Resource for ProjectMember {
    const NAME: &'static str = "project member";
    const PATH: &'static str = "/projects/{project_id}/members";
    type Item = User;
}

/// A project webhook.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectHook {
    /// Hook ID.
    pub id: Option<u64>,
    /// Target URL.
    pub url: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Response keys not modeled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Resource for ProjectHook {
    const NAME: &'static str = "project hook";
    const PATH: &'static str = "/projects/{project_id}/hooks";
    type Item = Self;
}

/// A repository branch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectBranch {
    /// Branch name.
    pub name: Option<String>,
    /// Whether the branch is protected.
    pub protected: Option<bool>,
    /// Tip commit.
    pub commit: Option<ProjectCommit>,
    /// Response keys not modeled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Resource for ProjectBranch {
    const NAME: &'static str = "project branch";
    const PATH: &'static str = "/projects/{project_id}/repository/branches";
    const OPERATIONS: Operations = Operations::NONE.with_get().with_list();
    type Item = Self;
}

/// A repository tag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectTag {
    /// Tag name.
    pub name: Option<String>,
    /// Whether the tag is protected.
    pub protected: Option<bool>,
    /// Tagged commit.
    pub commit: Option<ProjectCommit>,
    /// Response keys not modeled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Resource for ProjectTag {
    const NAME: &'static str = "project tag";
    const PATH: &'static str = "/projects/{project_id}/repository/tags";
    const OPERATIONS: Operations = Operations::NONE.with_list();
    type Item = Self;
}

/// A repository commit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectCommit {
    /// Full commit SHA.
    pub id: Option<String>,
    /// Abbreviated commit SHA.
    pub short_id: Option<String>,
    /// Commit title.
    pub title: Option<String>,
    /// Author name.
    pub author_name: Option<String>,
    /// Author email.
    pub author_email: Option<String>,
    /// Commit time.
    pub created_at: Option<DateTime<Utc>>,
    /// Response keys not modeled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Resource for ProjectCommit {
    const NAME: &'static str = "project commit";
    const PATH: &'static str = "/projects/{project_id}/repository/commits";
    const OPERATIONS: Operations = Operations::NONE.with_list();
    type Item = Self;
}

/// A project milestone.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectMilestone {
    /// Milestone ID.
    pub id: Option<u64>,
    /// Owning project ID.
    pub project_id: Option<u64>,
    /// Title.
    pub title: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Due date (YYYY-MM-DD).
    pub due_date: Option<String>,
    /// Milestone state.
    pub state: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Response keys not modeled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Resource for ProjectMilestone {
    const NAME: &'static str = "project milestone";
    const PATH: &'static str = "/projects/{project_id}/milestones";
    const OPERATIONS: Operations = Operations::ALL.without_delete();
    type Item = Self;
}

/// A merge request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectMergeRequest {
    /// Merge request ID.
    pub id: Option<u64>,
    /// Owning project ID.
    pub project_id: Option<u64>,
    /// Title.
    pub title: Option<String>,
    /// Source branch.
    pub source_branch: Option<String>,
    /// Target branch.
    pub target_branch: Option<String>,
    /// Merge request state.
    pub state: Option<String>,
    /// Upvote count.
    pub upvotes: Option<u32>,
    /// Downvote count.
    pub downvotes: Option<u32>,
    /// Author.
    pub author: Option<User>,
    /// Assignee.
    pub assignee: Option<User>,
    /// Response keys not modeled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Resource for ProjectMergeRequest {
    const NAME: &'static str = "project merge request";
    const PATH: &'static str = "/projects/{project_id}/merge_request";
    const OPERATIONS: Operations = Operations::ALL.without_delete();
    type Item = Self;
}

/// An issue.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Issue {
    /// Issue ID.
    pub id: Option<u64>,
    /// Owning project ID.
    pub project_id: Option<u64>,
    /// Title.
    pub title: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Labels.
    pub labels: Option<Vec<String>>,
    /// Attached milestone.
    pub milestone: Option<ProjectMilestone>,
    /// Assignee.
    pub assignee: Option<User>,
    /// Author.
    pub author: Option<User>,
    /// Whether the issue is closed.
    pub closed: Option<bool>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Response keys not modeled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Resource for Issue {
    const NAME: &'static str = "issue";
    const PATH: &'static str = "/issues";
    const OPERATIONS: Operations = Operations::NONE.with_list();
    type Item = Self;
}

/// An issue scoped to a project. Responses deserialize as [`Issue`], so this
/// kind is descriptor-only.
#[derive(Debug, Clone, Copy)]
pub struct ProjectIssue;

impl Resource for ProjectIssue {
    const NAME: &'static str = "project issue";
    const PATH: &'static str = "/projects/{project_id}/issues";
    const OPERATIONS: Operations = Operations::ALL.without_delete();
    type Item = Issue;
}

/// A group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Group {
    /// Group ID.
    pub id: Option<u64>,
    /// Group name.
    pub name: Option<String>,
    /// Path component.
    pub path: Option<String>,
    /// Owning user ID.
    pub owner_id: Option<u64>,
    /// Response keys not modeled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Resource for Group {
    const NAME: &'static str = "group";
    const PATH: &'static str = "/groups";
    type Item = Self;
}

/// A project snippet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snippet {
    /// Snippet ID.
    pub id: Option<u64>,
    /// Title.
    pub title: Option<String>,
    /// File name.
    pub file_name: Option<String>,
    /// Author.
    pub author: Option<User>,
    /// Expiry time.
    pub expires_at: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Response keys not modeled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Resource for Snippet {
    const NAME: &'static str = "snippet";
    const PATH: &'static str = "/projects/{project_id}/snippets";
    type Item = Self;
}
