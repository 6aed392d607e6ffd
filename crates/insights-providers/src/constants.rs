//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live in
//! `insights-domain`.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Gemini embedding dimension
pub const EMBEDDING_DIMENSION_GEMINI: usize = 768;

/// Default Gemini embedding model
pub const GEMINI_DEFAULT_MODEL: &str = "text-embedding-004";

/// Default Gemini API base URL
pub const GEMINI_DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model name reported by the null provider
pub const NULL_EMBEDDING_MODEL: &str = "null-hash";

// ============================================================================
// PINECONE CONSTANTS
// ============================================================================

/// Pinecone control plane URL
pub const PINECONE_CONTROL_URL: &str = "https://api.pinecone.io";

/// Pinecone REST API version header value
pub const PINECONE_API_VERSION: &str = "2024-07";

/// Default Pinecone index name
pub const PINECONE_DEFAULT_INDEX: &str = "semantic-insights";

/// Default serverless cloud
pub const PINECONE_DEFAULT_CLOUD: &str = "aws";

/// Default serverless region
pub const PINECONE_DEFAULT_REGION: &str = "us-east-1";

/// Maximum records per upsert request
pub const PINECONE_DEFAULT_BATCH_SIZE: usize = 100;

/// Largest `topK` a query may request
pub const PINECONE_MAX_TOP_K: usize = 10_000;

/// Attempts made while waiting for a new index to become ready
pub const PINECONE_READY_POLL_ATTEMPTS: u32 = 30;

/// Delay between readiness checks in milliseconds
pub const PINECONE_READY_POLL_INTERVAL_MS: u64 = 2_000;

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// Content type for JSON requests
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Default request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// LOCAL STORE CONSTANTS
// ============================================================================

/// Default storage file for the local backend
pub const LOCAL_DEFAULT_STORAGE_FILE: &str = "data/vector_store.json";

/// Suffix of the temporary file written before an atomic rename
pub const LOCAL_TEMP_SUFFIX: &str = "tmp";
