//! Backend endpoint configuration for the REST adapters.

use std::time::Duration;

/// Default interval between change-feed polls.
const DEFAULT_POLL_INTERVAL_MS: u64 = 2_000;

/// Configuration for the REST identity and document-store adapters.
///
/// Use the builder pattern to customize endpoints.
///
/// # Example
///
/// ```ignore
/// use halaqa_core::config::Config;
///
/// let config = Config::new("https://auth.example.com", "https://db.example.com")
///     .with_api_key("web-api-key")
///     .with_poll_interval(std::time::Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the identity provider REST API.
    pub identity_base_url: String,
    /// Base URL of the document store REST API.
    pub store_base_url: String,
    /// API key appended to identity requests.
    pub api_key: String,
    /// Interval between change-feed polls for the posts subscription.
    pub poll_interval: Duration,
}

impl Config {
    /// Create a config for the given endpoints with default settings.
    pub fn new(identity_base_url: impl Into<String>, store_base_url: impl Into<String>) -> Self {
        Self {
            identity_base_url: identity_base_url.into(),
            store_base_url: store_base_url.into(),
            api_key: String::new(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }

    /// Set the identity API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Set the change-feed poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Read endpoints from `HALAQA_AUTH_URL`, `HALAQA_STORE_URL` and
    /// `HALAQA_API_KEY`, falling back to localhost for development.
    pub fn from_env() -> Self {
        let identity = std::env::var("HALAQA_AUTH_URL")
            .unwrap_or_else(|_| "http://localhost:9099".to_string());
        let store = std::env::var("HALAQA_STORE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let mut config = Self::new(identity, store);
        if let Ok(key) = std::env::var("HALAQA_API_KEY") {
            config = config.with_api_key(key);
        }
        config
    }
}
