// ABOUTME: Retry logic with exponential backoff for handling transient failures
// ABOUTME: Retries network errors, timeouts, rate limits, and server errors

use crate::constants::retry;
use crate::error::JiraError;
use std::time::Duration;
use tokio::time::sleep;

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: retry::MAX_RETRIES,
            initial_delay: retry::INITIAL_DELAY,
            max_delay: retry::MAX_DELAY,
            backoff_multiplier: retry::BACKOFF_MULTIPLIER,
        }
    }
}

pub async fn retry_with_backoff<F, Fut, T>(
    config: &RetryConfig,
    mut operation: F,
) -> Result<T, JiraError>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, JiraError>>,
{
    let mut delay = config.initial_delay;

    for attempt in 0..=config.max_retries {
        if attempt > 0 {
            log::warn!(
                "retrying request (attempt {}/{})",
                attempt,
                config.max_retries
            );
            sleep(delay).await;
            delay = std::cmp::min(
                Duration::from_millis(
                    (delay.as_millis() as f64 * config.backoff_multiplier) as u64,
                ),
                config.max_delay,
            );
        }

        match operation().await {
            Ok(result) => return Ok(result),
            Err(error) => {
                if !error.is_retryable() || attempt == config.max_retries {
                    return Err(error);
                }
                log::debug!("request failed (retryable): {}", error);
            }
        }
    }

    // Unreachable: the loop always returns on the final attempt.
    Err(JiraError::Network("retry failed".to_string()))
}
