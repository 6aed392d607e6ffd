//! Composition root
//!
//! Turns an [`AppConfig`](crate::config::AppConfig) into wired services.
//!
//! ```text
//! AppConfig -> EmbeddingProviderFactory -> Arc<dyn EmbeddingProvider>
//!           -> connect_vector_store      -> VectorStore (remote or local)
//!           -> AppContext { SearchEngine, IndexingService }
//! ```

pub mod bootstrap;
pub mod factory;

pub use bootstrap::{AppContext, init_app};
pub use factory::{EmbeddingProviderFactory, connect_vector_store};
