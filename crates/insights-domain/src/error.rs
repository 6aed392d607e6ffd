//! Error handling types

use thiserror::Error;

use crate::constants::AUTHENTICATION_FAILED;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by context-bearing variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the Semantic Insights retrieval layer
#[derive(Error, Debug)]
pub enum Error {
    /// A vector's length disagrees with the store's established dimension
    #[error("Dimension mismatch{}: expected {expected}, found {found}", fmt_id(.id))]
    DimensionMismatch {
        /// Identifier of the offending record, when there is one
        id: Option<String>,
        /// Dimension established by the store or index
        expected: usize,
        /// Dimension of the rejected vector
        found: usize,
    },

    /// Remote index exists with a conflicting dimension or metric
    #[error(
        "Index '{index}' is incompatible: expected dimension {expected_dimension} ({expected_metric}), found {found_dimension} ({found_metric})"
    )]
    IndexIncompatible {
        /// Name of the remote index
        index: String,
        /// Dimension requested by this deployment
        expected_dimension: usize,
        /// Dimension reported by the service
        found_dimension: usize,
        /// Metric requested by this deployment
        expected_metric: String,
        /// Metric reported by the service
        found_metric: String,
    },

    /// Filter shape the active backend cannot express
    #[error("Unsupported filter for {backend}: {message}")]
    UnsupportedFilter {
        /// Backend that rejected the filter
        backend: String,
        /// Description of the unsupported shape
        message: String,
    },

    /// Transient remote failure (timeout, auth, quota, server error)
    #[error("Backend '{backend}' unavailable: {message}")]
    BackendUnavailable {
        /// Backend that failed
        backend: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The embedding collaborator failed
    #[error("Embedding provider '{provider}' unavailable: {message}")]
    EmbeddingUnavailable {
        /// Embedding provider that failed
        provider: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// No record matches a similarity-by-name lookup
    #[error("Participant not found: {participant}")]
    ParticipantNotFound {
        /// The participant name that was looked up
        participant: String,
    },

    /// A batched upsert committed some records before failing
    #[error("Upsert failed after committing {committed} of {attempted} records: {source}")]
    PartialUpsert {
        /// Records acknowledged by the backend before the failure
        committed: usize,
        /// Records in the request
        attempted: usize,
        /// The failure that stopped the batch sequence
        #[source]
        source: Box<Error>,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Vector database rejected a request
    #[error("Vector database error: {message}")]
    VectorDb {
        /// Description of the vector database error
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

fn fmt_id(id: &Option<String>) -> String {
    id.as_ref()
        .map(|id| format!(" for record '{id}'"))
        .unwrap_or_default()
}

// Retrieval error creation methods
impl Error {
    /// Create a dimension mismatch error for a specific record
    pub fn dimension_mismatch<S: Into<String>>(id: S, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            id: Some(id.into()),
            expected,
            found,
        }
    }

    /// Create a dimension mismatch error for a query vector
    pub fn query_dimension_mismatch(expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            id: None,
            expected,
            found,
        }
    }

    /// Create an unsupported filter error
    pub fn unsupported_filter<B: Into<String>, S: Into<String>>(backend: B, message: S) -> Self {
        Self::UnsupportedFilter {
            backend: backend.into(),
            message: message.into(),
        }
    }

    /// Create a backend unavailable error
    pub fn backend_unavailable<B: Into<String>, S: Into<String>>(backend: B, message: S) -> Self {
        Self::BackendUnavailable {
            backend: backend.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a backend unavailable error with source
    pub fn backend_unavailable_with_source<
        B: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        backend: B,
        message: S,
        source: E,
    ) -> Self {
        Self::BackendUnavailable {
            backend: backend.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an embedding unavailable error
    pub fn embedding_unavailable<P: Into<String>, S: Into<String>>(provider: P, message: S) -> Self {
        Self::EmbeddingUnavailable {
            provider: provider.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a participant not found error
    pub fn participant_not_found<S: Into<String>>(participant: S) -> Self {
        Self::ParticipantNotFound {
            participant: participant.into(),
        }
    }

    /// Wrap a batch failure together with the number of committed records
    pub fn partial_upsert(committed: usize, attempted: usize, source: Error) -> Self {
        Self::PartialUpsert {
            committed,
            attempted,
            source: Box::new(source),
        }
    }
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a vector database error
    pub fn vector_db<S: Into<String>>(message: S) -> Self {
        Self::VectorDb {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Classification helpers
impl Error {
    /// Whether a caller may retry the failed operation with backoff
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::BackendUnavailable { .. })
    }

    /// Whether the remote service rejected the configured credentials
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            Self::BackendUnavailable { message, .. } if message.starts_with(AUTHENTICATION_FAILED)
        )
    }

    /// Report any failure of an embedding call as `EmbeddingUnavailable`
    #[must_use]
    pub fn into_embedding_unavailable(self, provider: &str) -> Self {
        match self {
            err @ Self::EmbeddingUnavailable { .. } => err,
            other => Self::EmbeddingUnavailable {
                provider: provider.to_string(),
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }

    /// Records committed before the failure, for partial batch upserts
    pub fn committed(&self) -> Option<usize> {
        match self {
            Self::PartialUpsert { committed, .. } => Some(*committed),
            _ => None,
        }
    }
}
