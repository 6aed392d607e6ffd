//! Common helpers for embedding providers

use std::time::Duration;

use crate::constants::DEFAULT_HTTP_TIMEOUT_SECS;

/// Common constructor patterns used by embedding providers
pub mod constructor {
    /// Trim surrounding whitespace from an API key
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Trim an optional URL, dropping trailing slashes
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
    }

    /// Get effective URL with fallback to default
    pub fn get_effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url.map_or_else(|| default_url.to_string(), |url| url.trim().to_string())
    }
}

/// Default timeout for embedding API requests
pub const DEFAULT_EMBEDDING_TIMEOUT: Duration = Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS);
