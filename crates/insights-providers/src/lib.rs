//! # Semantic Insights - Provider Implementations
//!
//! User-selectable implementations of the ports defined in
//! `insights-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | Gemini, Null |
//! | Vector Store | `VectorStoreBackend` | Local (JSON file), Pinecone |
//!
//! ## Usage
//!
//! ```ignore
//! use insights_providers::vector_store::LocalVectorStore;
//! use insights_providers::embedding::GeminiEmbeddingProvider;
//! ```

// Re-export insights-domain types commonly used with providers
pub use insights_domain::error::{Error, Result};
pub use insights_domain::ports::providers::{EmbeddingProvider, VectorStoreBackend};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// HTTP client configuration for API-based providers
pub mod http;

/// Embedding provider implementations
///
/// Implements `EmbeddingProvider` for the Gemini API and an offline
/// deterministic provider.
pub mod embedding;

/// Vector store backend implementations
///
/// Implements `VectorStoreBackend` for the local file store and Pinecone.
pub mod vector_store;
