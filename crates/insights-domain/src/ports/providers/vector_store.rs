use crate::error::Result;
use crate::value_objects::{
    BackendKind, EmbeddingRecord, Filter, SearchResult, VectorStoreStats,
};
use async_trait::async_trait;

/// Vector Storage Backend Interface
///
/// Contract shared by the local file-backed store and the remote index.
/// Both score with cosine similarity and return results ordered by
/// descending score with ties broken by ascending record id.
///
/// # Example
///
/// ```ignore
/// use insights_domain::ports::providers::VectorStoreBackend;
/// use insights_domain::value_objects::Filter;
///
/// backend.upsert(records).await?;
///
/// let filter = Filter::new().gte("urgency_level", 4.0);
/// let results = backend.search(&query_vec, 5, Some(&filter)).await?;
/// for result in results {
///     println!("{} ({:.3})", result.record_id, result.score);
/// }
/// ```
#[async_trait]
pub trait VectorStoreBackend: Send + Sync {
    /// Insert or replace records by id
    ///
    /// # Arguments
    /// * `records` - Records to write; every vector must match the store dimension
    ///
    /// # Returns
    /// Ok(count) with the number of records written. A batch that fails
    /// validation writes nothing.
    async fn upsert(&self, records: Vec<EmbeddingRecord>) -> Result<usize>;

    /// Find the records most similar to a query vector
    ///
    /// # Arguments
    /// * `query` - Query vector with the store dimension
    /// * `top_k` - Maximum number of results
    /// * `filter` - Optional metadata filter (conjunction)
    ///
    /// # Returns
    /// Ok(results) with at most `top_k` entries; empty when nothing qualifies
    async fn search(
        &self,
        query: &[f32],
        top_k: usize,
        filter: Option<&Filter>,
    ) -> Result<Vec<SearchResult>>;

    /// Delete a record by id
    ///
    /// # Returns
    /// Ok(true) if a record existed and was removed
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Records whose metadata passes the filter, ordered by ascending id
    ///
    /// # Arguments
    /// * `filter` - Metadata filter
    /// * `limit` - Maximum number of records returned
    async fn find_by_metadata(&self, filter: &Filter, limit: usize)
    -> Result<Vec<EmbeddingRecord>>;

    /// Summary of the stored data
    async fn stats(&self) -> Result<VectorStoreStats>;

    /// Established vector dimension, if any
    async fn dimension(&self) -> Option<usize>;

    /// Which backend implementation this is
    fn backend_kind(&self) -> BackendKind;
}
