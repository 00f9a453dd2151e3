// ABOUTME: Jira SDK library providing an async REST client for issue browsing
// ABOUTME: Includes authentication, typed models, error taxonomy, and retry logic

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use secrecy::ExposeSecret;

pub mod builder;
pub mod constants;
pub mod error;
pub mod models;
pub mod retry;

#[cfg(test)]
mod test_helpers;

pub use builder::JiraClientConfig;
pub use error::JiraError;
pub use models::{
    Comment, Comments, Component, FavouriteFilter, Issue, IssueFields, IssueType, Priority,
    Project, Resolution, SearchResponse, Status, StatusCategory, User,
};
pub use retry::RetryConfig;

use crate::constants::api;

pub type Result<T> = std::result::Result<T, JiraError>;

/// Async client for the Jira REST API v2.
///
/// Construct via [`JiraClient::builder`] or [`JiraClient::from_env`]. All
/// requests carry basic auth, honor the configured timeout, and retry
/// transient failures with exponential backoff.
pub struct JiraClient {
    client: reqwest::Client,
    base_url: String,
    retry: RetryConfig,
}

impl JiraClient {
    /// Create a client for `host` with credentials taken from the
    /// `JIRA_USER` and `JIRA_API_TOKEN` environment variables.
    pub fn from_env(host: &str) -> Result<Self> {
        let username = std::env::var("JIRA_USER").map_err(|_| {
            JiraError::Configuration("JIRA_USER environment variable not set".to_string())
        })?;
        let api_token = std::env::var("JIRA_API_TOKEN").map_err(|_| {
            JiraError::Configuration("JIRA_API_TOKEN environment variable not set".to_string())
        })?;

        Self::builder()
            .host(host.to_string())
            .username(username)
            .api_token(api_token.into())
            .build()
    }

    pub(crate) fn from_config(config: JiraClientConfig) -> Result<Self> {
        let credentials = STANDARD.encode(format!(
            "{}:{}",
            config.username,
            config.api_token.expose_secret()
        ));

        let mut auth_value = HeaderValue::from_str(&format!("Basic {}", credentials))
            .map_err(|_| JiraError::Configuration("credentials are not valid header data".to_string()))?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("jira-cli/0.1.0"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout);
        if let Some(proxy) = config.proxy {
            builder = builder.proxy(proxy);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&config.host),
            retry: RetryConfig {
                max_retries: config.max_retries,
                ..RetryConfig::default()
            },
        })
    }

    /// Search for issues matching a JQL expression.
    ///
    /// `fields` restricts the issue fields the server populates;
    /// `max_results` is capped at the server page-size limit. Issues are
    /// returned in server order.
    pub async fn search_issues(
        &self,
        jql: &str,
        fields: &[String],
        max_results: u32,
    ) -> Result<Vec<Issue>> {
        let url = format!(
            "{}{}?jql={}&fields={}&maxResults={}",
            self.base_url,
            api::SEARCH_PATH,
            urlencoding::encode(jql),
            fields.join(","),
            max_results.min(api::MAX_RESULTS)
        );

        let response: SearchResponse = self.get(&url).await?;
        log::debug!(
            "search returned {} of {} issues",
            response.issues.len(),
            response.total
        );
        Ok(response.issues)
    }

    /// Get a single issue by key, with all fields populated.
    pub async fn get_issue(&self, key: &str) -> Result<Issue> {
        let url = format!(
            "{}{}/{}",
            self.base_url,
            api::ISSUE_PATH,
            urlencoding::encode(key)
        );

        self.get(&url).await.map_err(|e| match e {
            JiraError::Api { status: 404, .. } => JiraError::IssueNotFound(key.to_string()),
            other => other,
        })
    }

    /// All projects visible to the authenticated user.
    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.get(&format!("{}{}", self.base_url, api::PROJECT_PATH))
            .await
    }

    /// All statuses defined on the instance.
    pub async fn statuses(&self) -> Result<Vec<Status>> {
        self.get(&format!("{}{}", self.base_url, api::STATUS_PATH))
            .await
    }

    /// The fixed set of status categories.
    pub async fn status_categories(&self) -> Result<Vec<StatusCategory>> {
        self.get(&format!("{}{}", self.base_url, api::STATUS_CATEGORY_PATH))
            .await
    }

    /// All issue types defined on the instance.
    pub async fn issue_types(&self) -> Result<Vec<IssueType>> {
        self.get(&format!("{}{}", self.base_url, api::ISSUE_TYPE_PATH))
            .await
    }

    /// All priorities defined on the instance.
    pub async fn priorities(&self) -> Result<Vec<Priority>> {
        self.get(&format!("{}{}", self.base_url, api::PRIORITY_PATH))
            .await
    }

    /// All resolutions defined on the instance.
    pub async fn resolutions(&self) -> Result<Vec<Resolution>> {
        self.get(&format!("{}{}", self.base_url, api::RESOLUTION_PATH))
            .await
    }

    /// The authenticated user's favourite filters.
    pub async fn favourite_filters(&self) -> Result<Vec<FavouriteFilter>> {
        self.get(&format!("{}{}", self.base_url, api::FAVOURITE_FILTER_PATH))
            .await
    }

    /// Perform a GET request with retry for transient failures.
    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        retry::retry_with_backoff(&self.retry, || self.execute_get::<T>(url)).await
    }

    /// Execute a single GET request.
    async fn execute_get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                log::debug!("response decode failed: {}", e);
                JiraError::InvalidResponse
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            log::debug!("error response body: {}", body);
            Err(JiraError::from_response(status, &body))
        }
    }
}

/// Accept a bare hostname or a full base URL; strip trailing slashes.
fn normalize_base_url(host: &str) -> String {
    let trimmed = host.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}
