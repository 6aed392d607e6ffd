//! Embedding Provider Implementations
//!
//! Converts text into dense vector embeddings for semantic search.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Offline | Complete |
//! | GeminiEmbeddingProvider | Cloud | Complete |
//!
//! Use `NullEmbeddingProvider` for tests and offline runs; it hashes words
//! into buckets so texts sharing words land close together.

pub mod gemini;
pub mod helpers;
pub mod null;

// Re-export for convenience
pub use gemini::GeminiEmbeddingProvider;
pub use helpers::constructor;
pub use null::NullEmbeddingProvider;
