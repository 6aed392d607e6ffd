//! # Semantic Insights
//!
//! Search structured coaching-session insights by meaning rather than by
//! keyword.
//!
//! This crate is the public facade of the workspace. It re-exports the
//! layer crates and hosts the `insights` command line interface.
//!
//! ## Example
//!
//! ```ignore
//! use insights::infrastructure::{ConfigLoader, init_app};
//!
//! let context = init_app(ConfigLoader::new().load()?).await?;
//! for result in context.search_engine().search("fear of pricing", 5, None).await? {
//!     println!("{} {:.3} {:?}", result.record_id, result.score, result.explanation);
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value objects, the insight entity, errors and provider ports
//! - `providers` - local and Pinecone vector stores, Gemini and null embeddings
//! - `application` - vector store facade, search engine and indexing service
//! - `infrastructure` - configuration, logging and backend selection
//! - `cli` - the `insights` binary's commands

/// Domain layer - core types, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use insights_domain::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use insights_providers::*;
}

/// Application layer - facade and use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use insights_application::*;
}

/// Infrastructure layer - config, logging and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use insights_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the use cases at the crate root
pub use application::{IndexingService, SearchEngine, VectorStore};
