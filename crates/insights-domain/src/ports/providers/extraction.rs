use crate::entities::InsightRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Transcript Insight Extraction Interface
///
/// Opaque collaborator that turns a free-text transcript into a structured
/// [`InsightRecord`].
#[async_trait]
pub trait InsightExtractor: Send + Sync {
    /// Extract an insight record for a participant from a transcript
    async fn extract(&self, participant: &str, transcript: &str) -> Result<InsightRecord>;
}
