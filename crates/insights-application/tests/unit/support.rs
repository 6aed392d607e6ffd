//! Shared fixtures for application tests

use std::sync::Arc;

use async_trait::async_trait;
use insights_application::VectorStore;
use insights_domain::error::{Error, Result};
use insights_domain::ports::providers::EmbeddingProvider;
use insights_domain::value_objects::{Embedding, EmbeddingRecord, Metadata};
use insights_providers::vector_store::LocalVectorStore;
use tempfile::TempDir;

/// Embedder returning the same vector for every text
pub struct FixedEmbedder(pub Vec<f32>);

#[async_trait]
impl EmbeddingProvider for FixedEmbedder {
    async fn embed(&self, _text: &str) -> Result<Embedding> {
        Ok(Embedding::new(self.0.clone(), "fixed"))
    }

    fn dimensions(&self) -> usize {
        self.0.len()
    }

    fn provider_name(&self) -> &str {
        "fixed"
    }
}

/// Embedder that always fails
pub struct FailingEmbedder;

#[async_trait]
impl EmbeddingProvider for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Embedding> {
        Err(Error::internal("model offline"))
    }

    fn dimensions(&self) -> usize {
        3
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}

/// Local store in a fresh temp dir
pub async fn local_store(dir: &TempDir) -> Arc<VectorStore> {
    let backend = LocalVectorStore::open(dir.path().join("store.json"))
        .await
        .unwrap();
    Arc::new(VectorStore::new(Arc::new(backend)))
}

/// Record with the metadata fields the search engine reads
pub fn insight_record(
    id: &str,
    participant: &str,
    vector: Vec<f32>,
    business: &str,
    urgency: i64,
    goal: &str,
) -> EmbeddingRecord {
    EmbeddingRecord::new(id, vector, Metadata::new())
        .with_metadata("participant", participant)
        .with_metadata("business_focus", business)
        .with_metadata("urgency_level", urgency)
        .with_metadata("primary_goal", goal)
}
