//! Insight files
//!
//! Insights prepared ahead of indexing are stored as a JSON array of
//! insight objects.

use std::path::Path;

use insights_domain::entities::InsightRecord;
use insights_domain::error::{Error, Result};

use crate::error_ext::ErrorContext;

/// Read insights from a JSON array file
pub fn read_insights_file<P: AsRef<Path>>(path: P) -> Result<Vec<InsightRecord>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .io_context(format!("Failed to read insights file {}", path.display()))?;
    serde_json::from_str(&content).map_err(|e| {
        Error::invalid_argument(format!("Invalid insights file {}: {e}", path.display()))
    })
}
