//! Search-Related Value Objects
//!
//! Value objects representing ranked similarity matches.

use crate::value_objects::Metadata;
use serde::{Deserialize, Serialize};

/// Value Object: Ranked Search Result
///
/// Derived per query and never persisted.
///
/// ## Business Rules
///
/// - `score` is cosine similarity in `[-1, 1]`, higher is better
/// - `explanation` is annotation only and never changes ranking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// Identifier of the matched record
    pub record_id: String,
    /// Cosine similarity between the query and the record
    pub score: f32,
    /// Metadata of the matched record
    pub metadata: Metadata,
    /// Human-readable reason for the match (set by the search engine)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl SearchResult {
    /// Create an unexplained result
    pub fn new<S: Into<String>>(record_id: S, score: f32, metadata: Metadata) -> Self {
        Self {
            record_id: record_id.into(),
            score,
            metadata,
            explanation: None,
        }
    }
}

/// Order results by descending score, breaking ties by ascending id
pub fn rank_results(results: &mut [SearchResult]) {
    results.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.record_id.cmp(&b.record_id))
    });
}
