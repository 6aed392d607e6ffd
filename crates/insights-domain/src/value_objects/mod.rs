//! Domain Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`EmbeddingRecord`] | Identifier, vector and metadata stored by a backend |
//! | [`MetadataValue`] | Scalar or list metadata value |
//! | [`Filter`] | Conjunction of metadata conditions |
//! | [`SearchResult`] | Ranked match with optional explanation |
//! | [`VectorStoreStats`] | Summary of the serving backend |
//! | [`Embedding`] | Provider output for a piece of text |

/// Semantic embedding value objects
pub mod embedding;
/// Metadata filter model
pub mod filter;
/// Record metadata
pub mod metadata;
/// Embedding record
pub mod record;
/// Search results
pub mod search;
/// Backend statistics
pub mod stats;

pub use embedding::Embedding;
pub use filter::{Condition, FieldFilter, Filter, passes};
pub use metadata::{Metadata, MetadataExt, MetadataValue};
pub use record::EmbeddingRecord;
pub use search::{SearchResult, rank_results};
pub use stats::{BackendKind, VectorStoreStats};
