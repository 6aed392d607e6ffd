//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outer layers. High-level
//! modules define the traits here; providers and infrastructure implement
//! them.

/// External service provider ports
pub mod providers;

pub use providers::{EmbeddingProvider, InsightExtractor, VectorStoreBackend};
