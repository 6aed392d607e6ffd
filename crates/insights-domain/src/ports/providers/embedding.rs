use crate::error::Result;
use crate::value_objects::Embedding;
use async_trait::async_trait;

/// Text Embedding Generation Interface
///
/// Turns text into a fixed-length vector. Implementations must fail rather
/// than return a placeholder vector when the underlying service is
/// unavailable.
///
/// # Example
///
/// ```ignore
/// use insights_domain::ports::providers::EmbeddingProvider;
///
/// let embedding = provider.embed("Scale my coaching practice").await?;
/// assert_eq!(embedding.dimensions, provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for a single text
    async fn embed(&self, text: &str) -> Result<Embedding>;

    /// Generate embeddings for several texts, preserving order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for text in texts {
            embeddings.push(self.embed(text).await?);
        }
        Ok(embeddings)
    }

    /// Dimensionality of the vectors this provider produces
    fn dimensions(&self) -> usize;

    /// Provider identifier (e.g. "gemini", "null")
    fn provider_name(&self) -> &str;
}
