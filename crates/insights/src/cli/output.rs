//! Plain text rendering of command results

use insights_domain::constants::{
    FIELD_BUSINESS_FOCUS, FIELD_PARTICIPANT, FIELD_PRIMARY_GOAL, FIELD_URGENCY_LEVEL,
};
use insights_domain::value_objects::{MetadataExt, SearchResult, VectorStoreStats};

fn headline(rank: usize, result: &SearchResult) -> String {
    let metadata = &result.metadata;
    let mut line = format!("{rank}. [{:.3}] {}", result.score, result.record_id);
    if let Some(participant) = metadata.text(FIELD_PARTICIPANT) {
        line.push(' ');
        line.push_str(participant);
    }
    let business = metadata.text_or_empty(FIELD_BUSINESS_FOCUS);
    match metadata.number(FIELD_URGENCY_LEVEL) {
        Some(urgency) => line.push_str(&format!(" ({business}, urgency {urgency})")),
        None if !business.is_empty() => line.push_str(&format!(" ({business})")),
        None => {}
    }
    line
}

/// Render ranked results, one numbered block per result
pub fn render_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No matching insights\n".to_string();
    }

    let mut out = String::new();
    for (index, result) in results.iter().enumerate() {
        out.push_str(&headline(index + 1, result));
        out.push('\n');

        let goal = result.metadata.text_or_empty(FIELD_PRIMARY_GOAL);
        if !goal.is_empty() {
            out.push_str(&format!("   Goal: {goal}\n"));
        }
        if let Some(explanation) = &result.explanation {
            out.push_str(&format!("   Why: {explanation}\n"));
        }
    }
    out
}

/// Render vector store statistics
pub fn render_stats(stats: &VectorStoreStats) -> String {
    let dimension = stats
        .dimension
        .map_or_else(|| "not established".to_string(), |d| d.to_string());
    let mut out = format!(
        "Backend: {}\nVectors: {}\nDimension: {dimension}\nLocation: {}\n",
        stats.backend, stats.total_vectors, stats.location
    );
    if let Some(reason) = &stats.fallback_reason {
        out.push_str(&format!("Fallback: {reason}\n"));
    }
    out
}
