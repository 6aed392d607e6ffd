//! Configuration
//!
//! Typed application configuration and the Figment-based loader.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, EmbeddingConfig, EmbeddingProviderKind, LoggingConfig, VectorStoreConfig};
