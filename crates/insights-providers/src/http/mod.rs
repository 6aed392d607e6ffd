//! HTTP Client Configuration
//!
//! Builds the `reqwest` clients injected into API-based providers.

mod provider;

pub use provider::{HttpClientConfig, build_client};
