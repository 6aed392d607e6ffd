//! Vector Store Backend Implementations
//!
//! ## Available Backends
//!
//! | Backend | Type | Description |
//! |---------|------|-------------|
//! | LocalVectorStore | Local | In-memory records persisted to a JSON file, exhaustive cosine search |
//! | PineconeVectorStore | Cloud | Managed Pinecone serverless index |
//!
//! Both backends score with cosine similarity and order results by
//! descending score, breaking ties by ascending record id.

pub mod local;
pub mod pinecone;
pub mod similarity;

// Re-export for convenience
pub use local::LocalVectorStore;
pub use pinecone::{
    IndexDescriptionSummary, PineconeConfig, PineconeVectorStore, ensure_index, translate_filter,
};
pub use similarity::cosine_similarity;
