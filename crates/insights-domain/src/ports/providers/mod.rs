//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | VectorStoreBackend | Vector storage and similarity search |
//! | EmbeddingProvider | Text embedding generation |
//! | InsightExtractor | Transcript to insight extraction |

/// Embedding provider port
pub mod embedding;
/// Insight extraction port
pub mod extraction;
/// Vector store backend port
pub mod vector_store;

pub use embedding::EmbeddingProvider;
pub use extraction::InsightExtractor;
pub use vector_store::VectorStoreBackend;
