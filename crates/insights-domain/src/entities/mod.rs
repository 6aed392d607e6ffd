//! Domain Entities
//!
//! Objects with identity that outlive a single operation.

/// Extracted insight record
pub mod insight;

pub use insight::{InsightRecord, normalize_urgency};
