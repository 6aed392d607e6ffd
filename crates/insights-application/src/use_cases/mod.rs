//! Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`SearchEngine`] | Query embedding, ranking, explanations and query shapes |
//! | [`IndexingService`] | Insight records to embedding records |

/// Insight indexing
pub mod indexing_service;
/// Semantic search
pub mod search_engine;

pub use indexing_service::IndexingService;
pub use search_engine::SearchEngine;
