//! Application Layer - Semantic Insights
//!
//! Orchestrates the retrieval layer on top of the domain ports.
//!
//! ## Architecture
//!
//! The application layer:
//! - Wraps one vector store backend in the [`VectorStore`] facade
//! - Implements the query shapes of the [`SearchEngine`]
//! - Turns insight records into embedding records ([`IndexingService`])
//! - Has no dependencies on infrastructure or concrete providers
//!
//! ## Dependencies
//!
//! This crate depends only on `insights-domain` plus logging.

pub mod domain_services;
pub mod use_cases;
pub mod vector_store;

pub use domain_services::explanation::{explain_participant_match, explain_query_match};
pub use use_cases::{IndexingService, SearchEngine};
pub use vector_store::VectorStore;
