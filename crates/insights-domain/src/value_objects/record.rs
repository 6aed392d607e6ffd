//! Embedding Record Value Object
//!
//! The unit of storage for every vector store backend.

use crate::error::{Error, Result};
use crate::value_objects::{Metadata, MetadataValue};
use serde::{Deserialize, Serialize};

/// Value Object: Embedding Record
///
/// Pairs a stable identifier with a fixed-length vector and the metadata
/// used to filter and explain matches.
///
/// ## Business Rules
///
/// - `id` is unique within a store and stable across updates
/// - every vector in one store has the same length
/// - metadata never participates in similarity scoring
///
/// ## Example
///
/// ```rust
/// use insights_domain::value_objects::{EmbeddingRecord, Metadata};
///
/// let record = EmbeddingRecord::new("sess-1", vec![0.1, 0.2, 0.3], Metadata::new())
///     .with_metadata("participant", "Sarah Chen")
///     .with_metadata("urgency_level", 4_i64);
/// assert_eq!(record.dimension(), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingRecord {
    /// Unique identifier of the record
    pub id: String,
    /// Embedding vector
    pub vector: Vec<f32>,
    /// Filterable metadata
    #[serde(default)]
    pub metadata: Metadata,
}

impl EmbeddingRecord {
    /// Create a new record
    pub fn new<S: Into<String>>(id: S, vector: Vec<f32>, metadata: Metadata) -> Self {
        Self {
            id: id.into(),
            vector,
            metadata,
        }
    }

    /// Builder-style metadata insertion
    #[must_use]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<crate::value_objects::MetadataValue>,
    {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Length of the vector
    pub fn dimension(&self) -> usize {
        self.vector.len()
    }

    /// Reject NaN or infinite vector components and float metadata
    ///
    /// JSON has no representation for non-finite numbers, so such a record
    /// could neither be ranked nor persisted faithfully.
    pub fn check_finite(&self) -> Result<()> {
        if let Some(position) = self.vector.iter().position(|x| !x.is_finite()) {
            return Err(Error::invalid_argument(format!(
                "record '{}' has a non-finite vector component at {position}",
                self.id
            )));
        }
        let bad_field = self
            .metadata
            .iter()
            .find(|(_, value)| matches!(value, MetadataValue::Float(f) if !f.is_finite()));
        if let Some((field, _)) = bad_field {
            return Err(Error::invalid_argument(format!(
                "record '{}' has a non-finite value for '{field}'",
                self.id
            )));
        }
        Ok(())
    }
}
