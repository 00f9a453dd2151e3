// ABOUTME: Centralized constants for the Jira SDK
// ABOUTME: Contains API paths, result caps, timeouts, and retry tuning

/// REST API paths, relative to the instance base URL.
pub mod api {
    pub const SEARCH_PATH: &str = "/rest/api/2/search";
    pub const ISSUE_PATH: &str = "/rest/api/2/issue";
    pub const PROJECT_PATH: &str = "/rest/api/2/project";
    pub const STATUS_PATH: &str = "/rest/api/2/status";
    pub const STATUS_CATEGORY_PATH: &str = "/rest/api/2/statuscategory";
    pub const ISSUE_TYPE_PATH: &str = "/rest/api/2/issuetype";
    pub const PRIORITY_PATH: &str = "/rest/api/2/priority";
    pub const RESOLUTION_PATH: &str = "/rest/api/2/resolution";
    pub const FAVOURITE_FILTER_PATH: &str = "/rest/api/2/filter/favourite";

    /// The server rejects page sizes above this.
    pub const MAX_RESULTS: u32 = 100;
}

/// Timeout configurations.
pub mod timeouts {
    use std::time::Duration;

    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Retry tuning for transient failures.
pub mod retry {
    use std::time::Duration;

    pub const MAX_RETRIES: u32 = 3;
    pub const INITIAL_DELAY: Duration = Duration::from_millis(500);
    pub const MAX_DELAY: Duration = Duration::from_secs(10);
    pub const BACKOFF_MULTIPLIER: f64 = 2.0;
}
