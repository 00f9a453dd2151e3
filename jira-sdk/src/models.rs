// ABOUTME: Serde models for Jira REST API v2 issue and search payloads
// ABOUTME: Includes convenience accessors used by list and detail rendering

use serde::{Deserialize, Serialize};
use std::fmt;

/// Search result from a JQL query.
///
/// Returned by `GET /rest/api/2/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The index of the first result.
    #[serde(default)]
    pub start_at: u32,
    /// Maximum results requested.
    #[serde(default)]
    pub max_results: u32,
    /// Total number of matching issues.
    #[serde(default)]
    pub total: u32,
    /// The list of issues, in server-returned order.
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl SearchResponse {
    /// Check if there are more pages of results beyond this one.
    pub fn has_more(&self) -> bool {
        self.start_at + (self.issues.len() as u32) < self.total
    }
}

/// A Jira issue.
///
/// Returned by `GET /rest/api/2/issue/{issueKey}` or as part of search
/// results. Search results only populate the requested fields; every
/// field except summary, status, and type is therefore optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// The issue ID.
    pub id: String,
    /// The issue key (e.g., "DEMO-123").
    pub key: String,
    /// URL of the issue resource.
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    /// The issue fields.
    pub fields: IssueFields,
}

impl Issue {
    pub fn status(&self) -> &str {
        &self.fields.status.name
    }

    /// The status-category color tag ("blue-gray", "yellow", "green"),
    /// if the server provided one.
    pub fn status_category_color(&self) -> Option<&str> {
        self.fields
            .status
            .status_category
            .as_ref()
            .and_then(|c| c.color_name.as_deref())
    }

    pub fn issue_type(&self) -> &str {
        &self.fields.issuetype.name
    }

    /// The priority name, or "None" if not set.
    pub fn priority_name(&self) -> &str {
        self.fields
            .priority
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("None")
    }

    pub fn component_names(&self) -> Vec<&str> {
        self.fields.components.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn comment_count(&self) -> usize {
        self.fields
            .comment
            .as_ref()
            .map(|c| c.comments.len())
            .unwrap_or(0)
    }

    /// The raw wiki-markup description, or empty string if not set.
    pub fn description_raw(&self) -> &str {
        self.fields.description.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.fields.summary)
    }
}

/// Issue fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueFields {
    /// The issue summary/title.
    pub summary: String,
    /// The issue description as wiki markup.
    #[serde(default)]
    pub description: Option<String>,
    /// The issue status.
    pub status: Status,
    /// The issue type (Bug, Story, Task, etc.).
    pub issuetype: IssueType,
    /// The issue priority.
    #[serde(default)]
    pub priority: Option<Priority>,
    /// The issue assignee.
    #[serde(default)]
    pub assignee: Option<User>,
    /// Labels attached to the issue.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Components the issue is associated with.
    #[serde(default)]
    pub components: Vec<Component>,
    /// When the issue was created.
    #[serde(default)]
    pub created: Option<String>,
    /// When the issue was last updated.
    #[serde(default)]
    pub updated: Option<String>,
    /// Comments on the issue, only present on detail fetches.
    #[serde(default)]
    pub comment: Option<Comments>,
}

/// Issue status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    /// The status ID.
    #[serde(default)]
    pub id: String,
    /// The status name (e.g., "To Do", "In Progress", "Done").
    pub name: String,
    /// The status category.
    #[serde(default)]
    pub status_category: Option<StatusCategory>,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Status category (groups statuses into to-do, in-progress, done).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCategory {
    /// The category ID.
    #[serde(default)]
    pub id: u32,
    /// The category key ("new", "indeterminate", "done").
    pub key: String,
    /// The category name.
    pub name: String,
    /// The category color tag ("blue-gray", "yellow", "green").
    #[serde(default)]
    pub color_name: Option<String>,
}

/// Issue type (Bug, Story, Task, Epic, etc.).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueType {
    /// The issue type ID.
    #[serde(default)]
    pub id: String,
    /// The issue type name.
    pub name: String,
    /// Whether this is a subtask type.
    #[serde(default)]
    pub subtask: bool,
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Issue priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Priority {
    /// The priority ID.
    #[serde(default)]
    pub id: String,
    /// The priority name (e.g., "Highest", "High", "Medium", "Low").
    pub name: String,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A Jira user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The user's account ID.
    #[serde(default)]
    pub account_id: String,
    /// The user's display name.
    pub display_name: String,
    /// Whether the user is active.
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// A project component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    /// The component ID.
    #[serde(default)]
    pub id: String,
    /// The component name.
    pub name: String,
}

/// A Jira project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// The project ID.
    #[serde(default)]
    pub id: String,
    /// The project key (e.g., "DEMO").
    pub key: String,
    /// The project name.
    pub name: String,
}

/// A resolution (e.g., "Fixed", "Won't Fix").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    /// The resolution ID.
    #[serde(default)]
    pub id: String,
    /// The resolution name.
    pub name: String,
}

/// A server-stored filter referenced by numeric id.
///
/// Returned by `GET /rest/api/2/filter/favourite`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavouriteFilter {
    /// The filter ID (Jira serializes it as a string).
    pub id: String,
    /// The filter name.
    pub name: String,
}

/// The comment container on an issue detail payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comments {
    /// The comments themselves.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Total number of comments on the issue.
    #[serde(default)]
    pub total: u32,
}

/// A comment on an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// The comment ID.
    #[serde(default)]
    pub id: String,
    /// The comment author.
    #[serde(default)]
    pub author: Option<User>,
    /// The comment body as wiki markup.
    #[serde(default)]
    pub body: Option<String>,
    /// When the comment was created.
    #[serde(default)]
    pub created: Option<String>,
}
