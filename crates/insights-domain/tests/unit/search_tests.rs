//! Unit tests for search results and stats

#[cfg(test)]
mod tests {
    use insights_domain::value_objects::rank_results;
    use insights_domain::{BackendKind, Metadata, SearchResult, VectorStoreStats};

    #[test]
    fn test_rank_results_orders_by_score_then_id() {
        let mut results = vec![
            SearchResult::new("b", 0.5, Metadata::new()),
            SearchResult::new("c", 0.9, Metadata::new()),
            SearchResult::new("a", 0.5, Metadata::new()),
        ];
        rank_results(&mut results);
        let ids: Vec<_> = results.iter().map(|r| r.record_id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_new_result_has_no_explanation() {
        let result = SearchResult::new("a", 1.0, Metadata::new());
        assert!(result.explanation.is_none());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("explanation").is_none());
    }

    #[test]
    fn test_stats_serialize_backend_lowercase() {
        let stats = VectorStoreStats {
            backend: BackendKind::Local,
            total_vectors: 3,
            dimension: Some(768),
            location: "data/vectors.json".to_string(),
            fallback_reason: None,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["backend"], "local");
        assert_eq!(stats.backend, "local");
        assert_eq!(BackendKind::Pinecone.to_string(), "pinecone");
    }
}
