//! # Semantic Insights Domain
//!
//! Core types for the embedding-backed retrieval layer: value objects,
//! the insight entity, the error taxonomy and the provider ports.
//!
//! ## Layers
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`value_objects`] | Records, metadata, filters, results, stats |
//! | [`entities`] | [`InsightRecord`](entities::InsightRecord) |
//! | [`ports`] | Traits implemented by providers |
//! | [`error`] | [`Error`] and [`Result`] |

/// Domain layer constants
pub mod constants;
/// Domain entities
pub mod entities;
/// Error handling types
pub mod error;
/// Provider ports
pub mod ports;
/// Value objects
pub mod value_objects;

pub use entities::InsightRecord;
pub use error::{Error, Result};
pub use ports::{EmbeddingProvider, InsightExtractor, VectorStoreBackend};
pub use value_objects::{
    BackendKind, Condition, Embedding, EmbeddingRecord, FieldFilter, Filter, Metadata,
    MetadataExt, MetadataValue, SearchResult, VectorStoreStats,
};
