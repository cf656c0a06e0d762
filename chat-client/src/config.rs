use anyhow::Context;
use std::env;
use std::time::Duration;

/// Relay location used when `PUBLIC_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// How long a chat request may take before it is reported as a timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the relay, without a trailing slash.
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        reqwest::Url::parse(base_url)
            .with_context(|| format!("Invalid relay URL: {}", base_url))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        })
    }

    /// Read `PUBLIC_API_URL` once, falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> anyhow::Result<Self> {
        match env::var("PUBLIC_API_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
