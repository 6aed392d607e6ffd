//! Null embedding provider for testing and offline use
//!
//! Deterministic, hash-based embeddings. No external dependencies.

use async_trait::async_trait;

use insights_domain::constants::DEFAULT_EMBEDDING_DIMENSION;
use insights_domain::error::Result;
use insights_domain::ports::providers::EmbeddingProvider;
use insights_domain::value_objects::Embedding;

use crate::constants::NULL_EMBEDDING_MODEL;

/// Null embedding provider
///
/// Each lowercase word is hashed (FNV-1a) into one of `dimensions` buckets
/// and the bucket counts are L2-normalized. Identical texts always produce
/// identical vectors and texts sharing words score higher than unrelated
/// ones. Text without words yields the zero vector.
///
/// # Example
///
/// ```rust
/// use insights_providers::embedding::NullEmbeddingProvider;
/// use insights_domain::ports::providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 768);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a null provider with the default dimension
    pub fn new() -> Self {
        Self::with_dimensions(DEFAULT_EMBEDDING_DIMENSION)
    }

    /// Create a null provider with a custom dimension (at least 1)
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dimensions];
        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            let bucket = fnv1a(&word.to_lowercase()) % self.dimensions as u64;
            #[allow(clippy::cast_possible_truncation)]
            {
                vector[bucket as usize] += 1.0;
            }
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|x| *x /= norm);
        }
        vector
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn fnv1a(text: &str) -> u64 {
    text.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Embedding> {
        Ok(Embedding::new(self.vectorize(text), NULL_EMBEDDING_MODEL))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
