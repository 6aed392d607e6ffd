//! Application bootstrap
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let context = init_app(config).await?;
//!
//! let results = context.search_engine().search("pricing fears", 5, None).await?;
//! let stats = context.store().get_stats().await?;
//! ```

use std::sync::Arc;

use insights_application::{IndexingService, SearchEngine, VectorStore};
use insights_domain::error::Result;
use insights_domain::ports::providers::EmbeddingProvider;
use tracing::info;

use crate::config::AppConfig;
use crate::di::factory::{EmbeddingProviderFactory, connect_vector_store};

/// Wired services sharing one vector store and one embedding provider
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    store: Arc<VectorStore>,
    embedder: Arc<dyn EmbeddingProvider>,
    search_engine: SearchEngine,
    indexing: IndexingService,
}

impl AppContext {
    /// Assemble a context from already constructed collaborators
    pub fn new(
        config: AppConfig,
        store: Arc<VectorStore>,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            search_engine: SearchEngine::new(Arc::clone(&store), Arc::clone(&embedder)),
            indexing: IndexingService::new(Arc::clone(&store), Arc::clone(&embedder)),
            store,
            embedder,
        }
    }

    /// Vector store facade
    pub fn store(&self) -> &Arc<VectorStore> {
        &self.store
    }

    /// Embedding provider
    pub fn embedder(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.embedder
    }

    /// Search engine over the store
    pub fn search_engine(&self) -> &SearchEngine {
        &self.search_engine
    }

    /// Indexing service writing to the store
    pub fn indexing(&self) -> &IndexingService {
        &self.indexing
    }
}

/// Build the application context from configuration
///
/// The vector store dimension comes from the embedding provider, so a new
/// remote index is created with the length the provider produces.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    let embedder = EmbeddingProviderFactory::create(&config.embedding)?;
    let store = connect_vector_store(&config.vector_store, embedder.dimensions()).await?;

    info!(
        backend = %store.backend_kind(),
        embedding = embedder.provider_name(),
        dimension = embedder.dimensions(),
        "application initialized"
    );
    Ok(AppContext::new(config, Arc::new(store), embedder))
}
