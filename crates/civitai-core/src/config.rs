//! Centralized configuration for the Civitai client.
//!
//! Constants for the remote API live on [`ApiConfig`]; per-client settings
//! live on [`ClientConfig`].

use std::fmt;
use std::time::Duration;

/// API-level constants.
pub struct ApiConfig;

impl ApiConfig {
    pub const BASE_URL: &'static str = "https://civitai.com/api/v1";
    pub const USER_AGENT: &'static str = concat!("civitai-client/", env!("CARGO_PKG_VERSION"));
    /// Largest `limit` the image, creator and tag listings accept.
    pub const MAX_PAGE_SIZE: u32 = 200;
    /// Largest `limit` the model listing accepts.
    pub const MAX_MODEL_PAGE_SIZE: u32 = 100;
}

/// Settings for one [`ApiClient`](crate::client::ApiClient).
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL that bare endpoint paths are joined to.
    pub base_url: String,
    /// Optional bearer token sent on every request.
    pub api_key: Option<String>,
    /// Total request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ClientConfig {
    /// Default configuration with an optional API key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: ApiConfig::BASE_URL.to_string(),
            api_key: None,
            timeout: None,
            user_agent: ApiConfig::USER_AGENT.to_string(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://civitai.com/api/v1");
        assert!(config.api_key.is_none());
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("civitai-client/"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new(Some("secret-token".into()))
            .with_base_url("http://127.0.0.1:9000/api/v1");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("127.0.0.1:9000"));
    }
}
