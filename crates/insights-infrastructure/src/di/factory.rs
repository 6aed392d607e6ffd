//! Provider Factory
//!
//! Creates embedding providers and vector store backends from configuration.
//! All implementations come from `insights-providers`; this module only
//! handles wiring and the remote-to-local fallback.

use std::sync::Arc;
use std::time::Duration;

use insights_application::VectorStore;
use insights_domain::error::{Error, Result};
use insights_domain::ports::providers::EmbeddingProvider;
use insights_providers::embedding::{GeminiEmbeddingProvider, NullEmbeddingProvider};
use insights_providers::http::{HttpClientConfig, build_client};
use insights_providers::vector_store::{LocalVectorStore, PineconeConfig, PineconeVectorStore};
use tracing::{info, warn};

use crate::config::{EmbeddingConfig, EmbeddingProviderKind, VectorStoreConfig};
use crate::constants::{FALLBACK_AUTH_FAILED, FALLBACK_NO_CREDENTIALS, FALLBACK_UNREACHABLE};

/// Factory for creating embedding providers
pub struct EmbeddingProviderFactory;

impl EmbeddingProviderFactory {
    /// Create an embedding provider based on configuration
    ///
    /// # Errors
    /// * `Configuration` - Gemini is selected without an API key
    pub fn create(config: &EmbeddingConfig) -> Result<Arc<dyn EmbeddingProvider>> {
        match config.provider {
            EmbeddingProviderKind::Null => Ok(Arc::new(NullEmbeddingProvider::with_dimensions(
                config.dimensions,
            ))),
            EmbeddingProviderKind::Gemini => Self::create_gemini(config),
        }
    }

    fn create_gemini(config: &EmbeddingConfig) -> Result<Arc<dyn EmbeddingProvider>> {
        let api_key = non_blank(config.api_key.as_deref())
            .ok_or_else(|| Error::configuration("API key required for Gemini provider"))?;
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = build_client(&HttpClientConfig::with_timeout(timeout))?;
        Ok(Arc::new(GeminiEmbeddingProvider::new(
            api_key.to_string(),
            config.base_url.clone(),
            config.model.clone(),
            timeout,
            client,
        )))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn pinecone_config(config: &VectorStoreConfig, api_key: &str, dimension: usize) -> PineconeConfig {
    let mut pinecone = PineconeConfig::new(api_key, dimension);
    pinecone.index_name.clone_from(&config.index_name);
    pinecone.namespace.clone_from(&config.remote_namespace);
    pinecone.cloud.clone_from(&config.cloud);
    pinecone.region.clone_from(&config.region);
    pinecone.control_url.clone_from(&config.control_url);
    pinecone.batch_size = config.batch_size;
    pinecone.timeout = Duration::from_secs(config.timeout_secs);
    pinecone
}

async fn open_local(config: &VectorStoreConfig) -> Result<LocalVectorStore> {
    let local = LocalVectorStore::open(&config.local_storage_path).await?;
    info!(path = %local.path().display(), "using local vector store");
    Ok(local)
}

async fn fall_back(config: &VectorStoreConfig, reason: String) -> Result<VectorStore> {
    warn!(
        reason = %reason,
        path = %config.local_storage_path.display(),
        "remote vector store requested, falling back to local storage"
    );
    let local = open_local(config).await?;
    Ok(VectorStore::with_fallback(Arc::new(local), reason))
}

/// Build the vector store facade selected by configuration
///
/// `use_remote = false` opens the local store. With `use_remote = true`, the
/// Pinecone index is ensured for `dimension`. Missing or rejected
/// credentials and an unreachable service fall back to the local store,
/// which is logged and reported through the stats' fallback reason.
///
/// # Errors
/// * `IndexIncompatible` - the remote index exists with another dimension or metric
/// * `DimensionMismatch` - the local storage file is inconsistent
pub async fn connect_vector_store(config: &VectorStoreConfig, dimension: usize) -> Result<VectorStore> {
    if !config.use_remote {
        let local = open_local(config).await?;
        return Ok(VectorStore::new(Arc::new(local)));
    }

    let Some(api_key) = non_blank(config.remote_credentials.as_deref()) else {
        return fall_back(config, FALLBACK_NO_CREDENTIALS.to_string()).await;
    };

    let client = build_client(&HttpClientConfig::with_timeout(Duration::from_secs(
        config.timeout_secs,
    )))?;
    match PineconeVectorStore::connect(pinecone_config(config, api_key, dimension), client).await {
        Ok(remote) => Ok(VectorStore::new(Arc::new(remote))),
        Err(e) if e.is_authentication_failure() => {
            fall_back(config, format!("{FALLBACK_AUTH_FAILED}: {e}")).await
        }
        Err(e) if e.is_retryable() => fall_back(config, format!("{FALLBACK_UNREACHABLE}: {e}")).await,
        Err(e) => Err(e),
    }
}
