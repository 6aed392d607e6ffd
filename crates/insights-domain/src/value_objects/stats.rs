//! Vector Store Statistics
//!
//! Summary of the backend currently serving a vector store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vector store backend kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// In-process store persisted to a local file
    Local,
    /// Managed Pinecone index
    Pinecone,
}

impl BackendKind {
    /// Stable lowercase name of the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Pinecone => "pinecone",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for BackendKind {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Value Object: Vector Store Statistics
///
/// Computed on demand; never cached beyond a single call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VectorStoreStats {
    /// Backend actually serving requests
    pub backend: BackendKind,
    /// Number of stored vectors
    pub total_vectors: usize,
    /// Established vector dimension (`None` for an empty local store)
    pub dimension: Option<usize>,
    /// Storage file path or remote index name
    pub location: String,
    /// Why a remote backend was requested but local is serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}
