//! Vector Store facade
//!
//! Holds exactly one backend, chosen when the facade is built, and forwards
//! every call to it. The only state of its own is the reason a requested
//! remote backend was replaced by the local one.

use std::sync::Arc;

use insights_domain::error::Result;
use insights_domain::ports::providers::VectorStoreBackend;
use insights_domain::value_objects::{
    BackendKind, EmbeddingRecord, Filter, SearchResult, VectorStoreStats,
};

/// Backend-agnostic vector store
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use insights_application::VectorStore;
///
/// let store = VectorStore::new(Arc::new(local_backend));
/// store.upsert(records).await?;
/// let stats = store.get_stats().await?;
/// assert_eq!(stats.backend, "local");
/// ```
#[derive(Clone)]
pub struct VectorStore {
    backend: Arc<dyn VectorStoreBackend>,
    fallback_reason: Option<String>,
}

impl VectorStore {
    /// Wrap the backend that was asked for
    pub fn new(backend: Arc<dyn VectorStoreBackend>) -> Self {
        Self {
            backend,
            fallback_reason: None,
        }
    }

    /// Wrap a substitute backend, remembering why the requested one was not used
    pub fn with_fallback<S: Into<String>>(backend: Arc<dyn VectorStoreBackend>, reason: S) -> Self {
        Self {
            backend,
            fallback_reason: Some(reason.into()),
        }
    }

    /// Backend actually serving requests
    pub fn backend_kind(&self) -> BackendKind {
        self.backend.backend_kind()
    }

    /// Why a fallback happened, if it did
    pub fn fallback_reason(&self) -> Option<&str> {
        self.fallback_reason.as_deref()
    }

    /// Insert or replace records by id
    pub async fn upsert(&self, records: Vec<EmbeddingRecord>) -> Result<usize> {
        tracing::debug!(backend = %self.backend_kind(), count = records.len(), "upsert");
        self.backend.upsert(records).await
    }

    /// Similarity search with an optional metadata filter
    pub async fn search(
        &self,
        query: &[f32],
        top_k: usize,
        filter: Option<&Filter>,
    ) -> Result<Vec<SearchResult>> {
        tracing::debug!(backend = %self.backend_kind(), top_k, filtered = filter.is_some(), "search");
        self.backend.search(query, top_k, filter).await
    }

    /// Delete a record; true iff it existed
    pub async fn delete(&self, id: &str) -> Result<bool> {
        self.backend.delete(id).await
    }

    /// Records whose metadata passes the filter, ordered by id
    pub async fn find_by_metadata(&self, filter: &Filter, limit: usize) -> Result<Vec<EmbeddingRecord>> {
        self.backend.find_by_metadata(filter, limit).await
    }

    /// Established vector dimension, if any
    pub async fn dimension(&self) -> Option<usize> {
        self.backend.dimension().await
    }

    /// Statistics of the serving backend, including any fallback reason
    pub async fn get_stats(&self) -> Result<VectorStoreStats> {
        let mut stats = self.backend.stats().await?;
        stats.fallback_reason.clone_from(&self.fallback_reason);
        Ok(stats)
    }
}
