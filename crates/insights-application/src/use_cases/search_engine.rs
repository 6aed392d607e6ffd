//! Search Engine Use Case
//!
//! Embeds query text, searches the vector store and annotates each result
//! with an explanation. All operations are read-only.

use std::sync::Arc;

use insights_domain::constants::{FIELD_BUSINESS_FOCUS, FIELD_PARTICIPANT, FIELD_URGENCY_LEVEL};
use insights_domain::error::{Error, Result};
use insights_domain::ports::providers::EmbeddingProvider;
use insights_domain::value_objects::{Filter, MetadataExt, SearchResult};

use crate::domain_services::explanation::{explain_participant_match, explain_query_match};
use crate::vector_store::VectorStore;

/// Most records of one participant considered by a similarity lookup
const PARTICIPANT_RECORD_LIMIT: usize = 1_000;

/// Semantic search over indexed insights
pub struct SearchEngine {
    store: Arc<VectorStore>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl SearchEngine {
    /// Create a search engine over a shared vector store
    pub fn new(store: Arc<VectorStore>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, embedder }
    }

    /// Vector store the engine reads from
    pub fn store(&self) -> &VectorStore {
        &self.store
    }

    async fn embed_query(&self, query: &str) -> Result<Vec<f32>> {
        let embedding = self
            .embedder
            .embed(query)
            .await
            .map_err(|e| e.into_embedding_unavailable(self.embedder.provider_name()))?;

        if let Some(expected) = self.store.dimension().await {
            if embedding.vector.len() != expected {
                return Err(Error::query_dimension_mismatch(
                    expected,
                    embedding.vector.len(),
                ));
            }
        }
        Ok(embedding.vector)
    }

    /// Search by meaning, optionally restricted by a metadata filter
    ///
    /// # Arguments
    /// * `query` - Free text query
    /// * `top_k` - Maximum number of results
    /// * `filter` - Optional metadata filter
    ///
    /// # Errors
    /// * `EmbeddingUnavailable` - the query could not be embedded
    /// * `DimensionMismatch` - the query vector does not fit the store
    pub async fn search(
        &self,
        query: &str,
        top_k: usize,
        filter: Option<&Filter>,
    ) -> Result<Vec<SearchResult>> {
        let vector = self.embed_query(query).await?;
        let mut results = self.store.search(&vector, top_k, filter).await?;
        for result in &mut results {
            result.explanation = Some(explain_query_match(query, &result.metadata));
        }

        tracing::debug!(query, results = results.len(), "search completed");
        Ok(results)
    }

    /// Search restricted to a set of business types
    ///
    /// An empty set returns no results without querying the store. The
    /// business condition is ANDed with `filter` when one is given.
    pub async fn search_with_business_filter<S: AsRef<str>>(
        &self,
        query: &str,
        business_types: &[S],
        top_k: usize,
        filter: Option<&Filter>,
    ) -> Result<Vec<SearchResult>> {
        if business_types.is_empty() {
            return Ok(Vec::new());
        }

        let business = Filter::new().any_of(
            FIELD_BUSINESS_FOCUS,
            business_types.iter().map(|b| b.as_ref()),
        );
        let combined = match filter {
            Some(extra) => business.and(extra.clone()),
            None => business,
        };
        self.search(query, top_k, Some(&combined)).await
    }

    /// Search restricted to records with `urgency_level >= min_urgency`
    pub async fn search_by_urgency(
        &self,
        query: &str,
        min_urgency: u8,
        top_k: usize,
    ) -> Result<Vec<SearchResult>> {
        let filter = Filter::new().gte(FIELD_URGENCY_LEVEL, f64::from(min_urgency));
        self.search(query, top_k, Some(&filter)).await
    }

    /// Participants whose insights resemble a given participant's
    ///
    /// Uses the vector of the participant's record with the lowest id as the
    /// query and never returns records of that participant.
    ///
    /// # Errors
    /// * `ParticipantNotFound` - no record belongs to `participant_name`
    pub async fn get_similar_participants(
        &self,
        participant_name: &str,
        top_k: usize,
    ) -> Result<Vec<SearchResult>> {
        let own_filter = Filter::new().eq(FIELD_PARTICIPANT, participant_name);
        let own_records = self
            .store
            .find_by_metadata(&own_filter, PARTICIPANT_RECORD_LIMIT)
            .await?;
        let Some(source) = own_records.first() else {
            return Err(Error::participant_not_found(participant_name));
        };
        if top_k == 0 {
            return Ok(Vec::new());
        }

        // Own records may occupy the top slots; ask for enough to drop them.
        let candidates = self
            .store
            .search(&source.vector, top_k.saturating_add(own_records.len()), None)
            .await?;

        let results: Vec<SearchResult> = candidates
            .into_iter()
            .filter(|r| r.metadata.text(FIELD_PARTICIPANT) != Some(participant_name))
            .take(top_k)
            .map(|mut r| {
                r.explanation = Some(explain_participant_match(&source.metadata, &r.metadata));
                r
            })
            .collect();

        tracing::debug!(
            participant = participant_name,
            source = %source.id,
            results = results.len(),
            "similar participants"
        );
        Ok(results)
    }
}
