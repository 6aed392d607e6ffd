use std::time::Duration;

use insights_domain::error::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HTTP_TIMEOUT_SECS;

/// HTTP client configuration
///
/// Controls connection pooling and timeouts for provider HTTP clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
    /// Idle connection timeout
    pub idle_timeout: Duration,
    /// Total timeout for requests
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 10,
            idle_timeout: Duration::from_secs(90),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            user_agent: format!("insights/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create configuration with custom timeout only
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }
}

/// Build a `reqwest` client from configuration
pub fn build_client(config: &HttpClientConfig) -> Result<Client> {
    Client::builder()
        .pool_max_idle_per_host(config.max_idle_per_host)
        .pool_idle_timeout(config.idle_timeout)
        .timeout(config.timeout)
        .user_agent(&config.user_agent)
        .build()
        .map_err(|e| Error::configuration_with_source("Failed to create HTTP client", e))
}
