use std::time::Duration;

use backon::ExponentialBuilder;

/// Retry policy applied by the client when retries are enabled.
///
/// Failures are retried with an exponential backoff when
/// [`LakehouseError::is_retryable`](super::LakehouseError::is_retryable)
/// says so; validation errors never reach the transport and are never retried.
///
/// ```rust
/// use std::time::Duration;
/// use lakehouse_sdk::RetryConfig;
///
/// let config = RetryConfig::default()
///     .with_max_retries(2)
///     .with_min_delay(Duration::from_millis(100));
/// assert_eq!(config.max_retries, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt.
    pub max_retries: usize,
    /// Delay before the first retry.
    pub min_delay: Duration,
    /// Upper bound of the delay between two attempts.
    pub max_retry_interval: Duration,
    /// Randomize delays to avoid synchronized clients.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 4,
            min_delay: Duration::from_secs(1),
            max_retry_interval: Duration::from_secs(30),
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// Sets the maximum number of retries.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the delay before the first retry.
    #[must_use]
    pub fn with_min_delay(mut self, min_delay: Duration) -> Self {
        self.min_delay = min_delay;
        self
    }

    /// Sets the maximum delay between two attempts.
    #[must_use]
    pub fn with_max_retry_interval(mut self, max_retry_interval: Duration) -> Self {
        self.max_retry_interval = max_retry_interval;
        self
    }

    /// Enables or disables jitter.
    #[must_use]
    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    pub(crate) fn backoff(&self) -> ExponentialBuilder {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(self.min_delay)
            .with_max_delay(self.max_retry_interval)
            .with_max_times(self.max_retries);
        if self.jitter {
            backoff.with_jitter()
        } else {
            backoff
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retry_config() {
        let config = RetryConfig::default();

        assert_eq!(config.max_retries, 4);
        assert_eq!(config.min_delay, Duration::from_secs(1));
        assert_eq!(config.max_retry_interval, Duration::from_secs(30));
        assert!(config.jitter);
    }

    #[test]
    fn test_builder_methods() {
        let config = RetryConfig::default()
            .with_max_retries(1)
            .with_min_delay(Duration::from_millis(5))
            .with_max_retry_interval(Duration::from_millis(20))
            .with_jitter(false);

        assert_eq!(
            config,
            RetryConfig {
                max_retries: 1,
                min_delay: Duration::from_millis(5),
                max_retry_interval: Duration::from_millis(20),
                jitter: false,
            }
        );
    }
}
