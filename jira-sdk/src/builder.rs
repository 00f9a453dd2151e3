// ABOUTME: Builder pattern implementation for JiraClient configuration
// ABOUTME: Provides type-safe configuration with secret-protected credentials

use crate::error::JiraError;
use crate::JiraClient;
use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;
use url::Url;

use crate::constants::timeouts;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<JiraClient, JiraError>))]
pub struct JiraClientConfig {
    /// Instance host ("issues.example.com") or full base URL.
    pub host: String,

    /// Account email used for basic auth.
    pub username: String,

    /// API token, never logged or printed.
    pub api_token: SecretString,

    #[builder(default = timeouts::DEFAULT_REQUEST_TIMEOUT)]
    pub timeout: Duration,

    #[builder(default = crate::constants::retry::MAX_RETRIES)]
    pub max_retries: u32,

    #[builder(default = None)]
    pub proxy: Option<reqwest::Proxy>,
}

impl From<JiraClientConfig> for Result<JiraClient, JiraError> {
    fn from(config: JiraClientConfig) -> Self {
        JiraClient::from_config(config)
    }
}

impl JiraClient {
    pub fn builder() -> JiraClientConfigBuilder<((), (), (), (), (), ())> {
        JiraClientConfig::builder()
    }

    pub fn create_proxy(url: &str) -> Result<reqwest::Proxy, JiraError> {
        let parsed_url = Url::parse(url)
            .map_err(|e| JiraError::Configuration(format!("Invalid proxy URL: {}", e)))?;

        reqwest::Proxy::all(parsed_url.as_str())
            .map_err(|e| JiraError::Configuration(format!("Invalid proxy configuration: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> SecretString {
        SecretString::from("test-api-token".to_string())
    }

    #[test]
    fn test_builder_with_minimal_config() {
        let client = JiraClient::builder()
            .host("issues.example.com".to_string())
            .username("user@example.com".to_string())
            .api_token(token())
            .build();

        assert!(client.is_ok());
    }

    #[test]
    fn test_builder_with_all_options() {
        let client = JiraClient::builder()
            .host("https://issues.example.com".to_string())
            .username("user@example.com".to_string())
            .api_token(token())
            .timeout(Duration::from_secs(60))
            .max_retries(5)
            .build();

        assert!(client.is_ok());
    }

    #[test]
    fn test_builder_validates_proxy_url() {
        let result = JiraClient::create_proxy("not-a-url");

        match result {
            Err(JiraError::Configuration(msg)) => {
                assert!(msg.contains("Invalid proxy URL"));
            }
            _ => panic!("Expected configuration error"),
        }
    }

    #[test]
    fn test_builder_with_valid_proxy() {
        let proxy = JiraClient::create_proxy("http://proxy:8080").unwrap();

        let client = JiraClient::builder()
            .host("issues.example.com".to_string())
            .username("user@example.com".to_string())
            .api_token(token())
            .proxy(Some(proxy))
            .build();

        assert!(client.is_ok());
    }

    #[test]
    fn test_token_is_not_debug_printed() {
        let api_token = token();
        let debug_str = format!("{:?}", api_token);
        assert!(!debug_str.contains("test-api-token"));
    }
}
