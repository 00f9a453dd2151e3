// ABOUTME: Custom error types for the Jira SDK with user-friendly messages
// ABOUTME: Maps HTTP failures and Jira error payloads to a typed taxonomy

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JiraError {
    #[error("Authentication failed. Check JIRA_USER and JIRA_API_TOKEN")]
    Auth,

    #[error("Issue {0} not found")]
    IssueNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limit exceeded. Please wait before making more requests")]
    RateLimit,

    #[error("Invalid API response format")]
    InvalidResponse,

    #[error("Timeout: Request took too long to complete")]
    Timeout,

    #[error("Jira API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl JiraError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            JiraError::Auth => Some(
                "Create an API token at https://id.atlassian.com/manage-profile/security/api-tokens\nThen export JIRA_USER=<email> and JIRA_API_TOKEN=<token>",
            ),
            JiraError::IssueNotFound(_) => {
                Some("Please check the issue key format (e.g., DEMO-123)")
            }
            JiraError::Network(_) => Some("Check your internet connection and try again"),
            JiraError::RateLimit => Some("Wait a moment before making another request"),
            JiraError::Timeout => Some("Try again or check your network connection"),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            JiraError::Network(_) | JiraError::Timeout | JiraError::RateLimit => true,
            JiraError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Map an unsuccessful HTTP response to an error, preferring the
    /// human-readable messages Jira embeds in its error payloads.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        let message = extract_error_messages(body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

        match status.as_u16() {
            401 | 403 => JiraError::Auth,
            429 => JiraError::RateLimit,
            code => JiraError::Api {
                status: code,
                message,
            },
        }
    }
}

/// Jira error payloads carry either an `errorMessages` array or an
/// `errors` object keyed by field name.
fn extract_error_messages(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;

    if let Some(messages) = json.get("errorMessages").and_then(|m| m.as_array()) {
        let joined: Vec<&str> = messages.iter().filter_map(|v| v.as_str()).collect();
        if !joined.is_empty() {
            return Some(joined.join(", "));
        }
    }

    if let Some(errors) = json.get("errors").and_then(|e| e.as_object()) {
        let joined: Vec<String> = errors.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        if !joined.is_empty() {
            return Some(joined.join(", "));
        }
    }

    None
}

impl From<reqwest::Error> for JiraError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            JiraError::Timeout
        } else {
            JiraError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for JiraError {
    fn from(_err: serde_json::Error) -> Self {
        JiraError::InvalidResponse
    }
}
