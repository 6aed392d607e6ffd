//! Gemini Embedding Provider
//!
//! Implements the EmbeddingProvider port using Google's Gemini embedding API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use insights_domain::error::{Error, Result};
use insights_domain::ports::providers::EmbeddingProvider;
use insights_domain::value_objects::Embedding;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_GEMINI, GEMINI_DEFAULT_BASE_URL,
};
use crate::embedding::helpers::constructor;
use crate::utils::{HttpResponseUtils, ServiceRole};

const PROVIDER_NAME: &str = "gemini";

#[derive(Debug, Deserialize)]
struct EmbedContentResponse {
    embedding: EmbeddingValues,
}

#[derive(Debug, Deserialize)]
struct EmbeddingValues {
    #[serde(default)]
    values: Vec<f32>,
}

/// Gemini embedding provider
///
/// Receives its HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use insights_providers::embedding::GeminiEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// let provider = GeminiEmbeddingProvider::new(
///     "AIza-your-api-key".to_string(),
///     None,
///     "text-embedding-004".to_string(),
///     Duration::from_secs(30),
///     Client::new(),
/// );
/// assert_eq!(provider.model(), "text-embedding-004");
/// ```
pub struct GeminiEmbeddingProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl GeminiEmbeddingProvider {
    /// Create a new Gemini embedding provider
    ///
    /// # Arguments
    /// * `api_key` - Google AI API key
    /// * `base_url` - Optional custom base URL (defaults to Google AI API)
    /// * `model` - Model name (e.g., "text-embedding-004")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: constructor::validate_api_key(&api_key),
            base_url: constructor::validate_url(base_url),
            model,
            timeout,
            http_client,
        }
    }

    fn effective_base_url(&self) -> String {
        constructor::get_effective_url(self.base_url.as_deref(), GEMINI_DEFAULT_BASE_URL)
    }

    /// Model name for API calls (without a `models/` prefix)
    pub fn api_model_name(&self) -> &str {
        self.model.strip_prefix("models/").unwrap_or(&self.model)
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> String {
        self.effective_base_url()
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let payload = serde_json::json!({
            "model": format!("models/{}", self.api_model_name()),
            "content": { "parts": [{ "text": text }] }
        });

        let url = format!(
            "{}/v1beta/models/{}:embedContent",
            self.effective_base_url(),
            self.api_model_name()
        );

        tracing::debug!(model = %self.model, chars = text.len(), "requesting Gemini embedding");

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::request_error(e, PROVIDER_NAME, ServiceRole::Embedding))?;

        let body: EmbedContentResponse =
            HttpResponseUtils::check_and_parse(response, PROVIDER_NAME, ServiceRole::Embedding)
                .await?;

        if body.embedding.values.is_empty() {
            return Err(Error::embedding_unavailable(
                PROVIDER_NAME,
                "response contained no embedding values",
            ));
        }

        Ok(Embedding::new(body.embedding.values, self.model.clone()))
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_GEMINI
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}
