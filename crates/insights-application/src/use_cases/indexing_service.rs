//! Indexing Service Use Case
//!
//! Turns insight records into embedding records and writes them to the
//! vector store in a single upsert.

use std::sync::Arc;

use insights_domain::entities::InsightRecord;
use insights_domain::error::{Error, Result};
use insights_domain::ports::providers::{EmbeddingProvider, InsightExtractor};
use insights_domain::value_objects::EmbeddingRecord;

use crate::vector_store::VectorStore;

/// Indexes insights into a vector store
pub struct IndexingService {
    store: Arc<VectorStore>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl IndexingService {
    /// Create an indexing service writing to a shared vector store
    pub fn new(store: Arc<VectorStore>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, embedder }
    }

    /// Embed and store insights
    ///
    /// Every insight is embedded before anything is written, so an
    /// embedding failure leaves the store untouched.
    ///
    /// # Returns
    /// Ok(count) with the number of records written
    pub async fn index_insights(&self, insights: &[InsightRecord]) -> Result<usize> {
        if insights.is_empty() {
            return Ok(0);
        }
        for insight in insights {
            validate(insight)?;
        }

        let texts: Vec<String> = insights.iter().map(InsightRecord::searchable_text).collect();
        let embeddings = self
            .embedder
            .embed_batch(&texts)
            .await
            .map_err(|e| e.into_embedding_unavailable(self.embedder.provider_name()))?;
        if embeddings.len() != insights.len() {
            return Err(Error::embedding_unavailable(
                self.embedder.provider_name(),
                format!(
                    "expected {} embeddings, received {}",
                    insights.len(),
                    embeddings.len()
                ),
            ));
        }

        let mut expected = self.store.dimension().await;
        let mut records = Vec::with_capacity(insights.len());
        for (insight, embedding) in insights.iter().zip(embeddings) {
            let found = embedding.vector.len();
            let dimension = *expected.get_or_insert(found);
            if found != dimension {
                return Err(Error::dimension_mismatch(insight.id.clone(), dimension, found));
            }
            records.push(EmbeddingRecord::new(
                insight.id.clone(),
                embedding.vector,
                insight.metadata(),
            ));
        }

        let written = self.store.upsert(records).await?;
        tracing::info!(written, "indexed insights");
        Ok(written)
    }

    /// Extract an insight from a transcript and index it
    ///
    /// # Returns
    /// The extracted insight, after it has been stored
    pub async fn ingest_transcript(
        &self,
        extractor: &dyn InsightExtractor,
        participant: &str,
        transcript: &str,
    ) -> Result<InsightRecord> {
        let insight = extractor.extract(participant, transcript).await?;
        validate(&insight)?;
        self.index_insights(std::slice::from_ref(&insight)).await?;
        Ok(insight)
    }
}

fn validate(insight: &InsightRecord) -> Result<()> {
    if insight.id.trim().is_empty() {
        return Err(Error::invalid_argument("insight id must not be empty"));
    }
    if insight.participant.trim().is_empty() {
        return Err(Error::invalid_argument(format!(
            "insight '{}' has no participant",
            insight.id
        )));
    }
    Ok(())
}
