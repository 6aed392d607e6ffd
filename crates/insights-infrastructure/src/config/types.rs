//! Configuration types

use std::fmt;
use std::path::PathBuf;

use insights_domain::constants::DEFAULT_EMBEDDING_DIMENSION;
use insights_providers::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, GEMINI_DEFAULT_MODEL, LOCAL_DEFAULT_STORAGE_FILE,
    PINECONE_CONTROL_URL, PINECONE_DEFAULT_BATCH_SIZE, PINECONE_DEFAULT_CLOUD,
    PINECONE_DEFAULT_INDEX, PINECONE_DEFAULT_REGION,
};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Vector storage backend selection
    pub vector_store: VectorStoreConfig,
    /// Embedding provider selection
    pub embedding: EmbeddingConfig,
    /// Logging output
    pub logging: LoggingConfig,
}

/// Vector store configuration
///
/// `use_remote` asks for the Pinecone backend. Without credentials, or when
/// the service cannot be reached, the local file-backed store serves instead.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VectorStoreConfig {
    /// Request the remote backend
    pub use_remote: bool,
    /// Pinecone API key
    pub remote_credentials: Option<String>,
    /// Pinecone namespace ("" is the default namespace)
    pub remote_namespace: String,
    /// JSON file backing the local store
    pub local_storage_path: PathBuf,
    /// Pinecone index name
    pub index_name: String,
    /// Serverless cloud used when the index is created
    pub cloud: String,
    /// Serverless region used when the index is created
    pub region: String,
    /// Pinecone control plane URL
    pub control_url: String,
    /// Timeout for each remote request
    pub timeout_secs: u64,
    /// Records per upsert request
    pub batch_size: usize,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            use_remote: false,
            remote_credentials: None,
            remote_namespace: String::new(),
            local_storage_path: PathBuf::from(LOCAL_DEFAULT_STORAGE_FILE),
            index_name: PINECONE_DEFAULT_INDEX.to_string(),
            cloud: PINECONE_DEFAULT_CLOUD.to_string(),
            region: PINECONE_DEFAULT_REGION.to_string(),
            control_url: PINECONE_CONTROL_URL.to_string(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            batch_size: PINECONE_DEFAULT_BATCH_SIZE,
        }
    }
}

impl fmt::Debug for VectorStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorStoreConfig")
            .field("use_remote", &self.use_remote)
            .field("remote_credentials", &self.remote_credentials.as_ref().map(|_| "***"))
            .field("remote_namespace", &self.remote_namespace)
            .field("local_storage_path", &self.local_storage_path)
            .field("index_name", &self.index_name)
            .field("cloud", &self.cloud)
            .field("region", &self.region)
            .field("control_url", &self.control_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("batch_size", &self.batch_size)
            .finish()
    }
}

/// Embedding provider kind
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProviderKind {
    /// Google Gemini embedding API
    #[default]
    Gemini,
    /// Deterministic offline embeddings
    Null,
}

/// Embedding provider configuration
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Which provider to use
    pub provider: EmbeddingProviderKind,
    /// API key (Gemini)
    pub api_key: Option<String>,
    /// Model name (Gemini)
    pub model: String,
    /// Custom API base URL
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout_secs: u64,
    /// Vector length produced by the null provider
    pub dimensions: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProviderKind::default(),
            api_key: None,
            model: GEMINI_DEFAULT_MODEL.to_string(),
            base_url: None,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            dimensions: DEFAULT_EMBEDDING_DIMENSION,
        }
    }
}

impl fmt::Debug for EmbeddingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddingConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("dimensions", &self.dimensions)
            .finish()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}
