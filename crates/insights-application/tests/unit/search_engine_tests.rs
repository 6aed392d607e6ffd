//! Tests for the search engine use case

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use insights_application::{SearchEngine, VectorStore};
    use insights_domain::Error;
    use insights_domain::value_objects::Filter;
    use tempfile::TempDir;

    use crate::support::{FailingEmbedder, FixedEmbedder, insight_record, local_store};

    async fn seeded_store(dir: &TempDir) -> Arc<VectorStore> {
        let store = local_store(dir).await;
        store
            .upsert(vec![
                insight_record("a", "Sarah", vec![1.0, 0.0, 0.0], "coaching", 5, "Grow my coaching business"),
                insight_record("b", "Marcus", vec![0.0, 1.0, 0.0], "saas", 2, "Ship version two"),
                insight_record("c", "Ana", vec![0.7, 0.7, 0.0], "ecommerce", 4, "Open a second shop"),
            ])
            .await
            .unwrap();
        store
    }

    fn engine(store: Arc<VectorStore>, vector: Vec<f32>) -> SearchEngine {
        SearchEngine::new(store, Arc::new(FixedEmbedder(vector)))
    }

    #[tokio::test]
    async fn test_search_attaches_explanations() {
        let dir = TempDir::new().unwrap();
        let engine = engine(seeded_store(&dir).await, vec![1.0, 0.0, 0.0]);

        let results = engine.search("coaching growth", 3, None).await.unwrap();
        let ids: Vec<_> = results.iter().map(|r| r.record_id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "b"]);
        assert_eq!(
            results[0].explanation.as_deref(),
            Some("Similar goal + Same business type")
        );
        assert_eq!(
            results[2].explanation.as_deref(),
            Some("Semantic similarity")
        );
    }

    #[tokio::test]
    async fn test_embedding_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let engine = SearchEngine::new(seeded_store(&dir).await, Arc::new(FailingEmbedder));

        match engine.search("anything", 3, None).await {
            Err(Error::EmbeddingUnavailable { provider, .. }) => assert_eq!(provider, "failing"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_query_dimension_must_match_store() {
        let dir = TempDir::new().unwrap();
        let engine = engine(seeded_store(&dir).await, vec![1.0, 0.0]);

        assert!(matches!(
            engine.search("anything", 3, None).await,
            Err(Error::DimensionMismatch {
                id: None,
                expected: 3,
                found: 2
            })
        ));
    }

    #[tokio::test]
    async fn test_empty_business_set_skips_embedding() {
        let dir = TempDir::new().unwrap();
        let engine = SearchEngine::new(seeded_store(&dir).await, Arc::new(FailingEmbedder));

        let none: [&str; 0] = [];
        let results = engine
            .search_with_business_filter("anything", &none, 5, None)
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_business_filter() {
        let dir = TempDir::new().unwrap();
        let engine = engine(seeded_store(&dir).await, vec![0.0, 1.0, 0.0]);

        let results = engine
            .search_with_business_filter("growth", &["coaching", "ecommerce"], 5, None)
            .await
            .unwrap();
        let ids: Vec<_> = results.iter().map(|r| r.record_id.as_str()).collect();
        assert_eq!(ids, ["c", "a"]);

        let urgent = Filter::new().gte("urgency_level", 5.0);
        let results = engine
            .search_with_business_filter("growth", &["coaching", "ecommerce"], 5, Some(&urgent))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].record_id, "a");
    }

    #[tokio::test]
    async fn test_urgency_filter() {
        let dir = TempDir::new().unwrap();
        let engine = engine(seeded_store(&dir).await, vec![0.0, 1.0, 0.0]);

        let results = engine.search_by_urgency("anything", 4, 5).await.unwrap();
        let ids: Vec<_> = results.iter().map(|r| r.record_id.as_str()).collect();
        assert_eq!(ids, ["c", "a"]);

        assert!(engine.search_by_urgency("anything", 5, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_similar_participants_exclude_the_participant() {
        let dir = TempDir::new().unwrap();
        let store = local_store(&dir).await;
        store
            .upsert(vec![
                insight_record("sarah-1", "Sarah", vec![1.0, 0.0, 0.0], "coaching", 4, "Grow coaching revenue"),
                insight_record("sarah-2", "Sarah", vec![0.9, 0.1, 0.0], "coaching", 4, "Raise prices"),
                insight_record("marcus-1", "Marcus", vec![0.95, 0.05, 0.0], "coaching", 5, "Double revenue"),
                insight_record("ana-1", "Ana", vec![0.0, 1.0, 0.0], "saas", 1, "Hire first engineer"),
            ])
            .await
            .unwrap();
        let engine = SearchEngine::new(store, Arc::new(FailingEmbedder));

        let results = engine.get_similar_participants("Sarah", 2).await.unwrap();
        let ids: Vec<_> = results.iter().map(|r| r.record_id.as_str()).collect();
        assert_eq!(ids, ["marcus-1", "ana-1"]);
        assert_eq!(
            results[0].explanation.as_deref(),
            Some("Same business type + Similar goal + Similar urgency")
        );
        assert_eq!(
            results[1].explanation.as_deref(),
            Some("Semantic similarity")
        );
    }

    #[tokio::test]
    async fn test_similar_participants_with_extreme_top_k() {
        let dir = TempDir::new().unwrap();
        let engine = SearchEngine::new(seeded_store(&dir).await, Arc::new(FailingEmbedder));

        let all = engine.get_similar_participants("Sarah", usize::MAX).await.unwrap();
        let ids: Vec<_> = all.iter().map(|r| r.record_id.as_str()).collect();
        assert_eq!(ids, ["c", "b"]);

        assert!(engine.get_similar_participants("Sarah", 0).await.unwrap().is_empty());
        assert!(matches!(
            engine.get_similar_participants("Nobody", 0).await,
            Err(Error::ParticipantNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_participant() {
        let dir = TempDir::new().unwrap();
        let engine = engine(seeded_store(&dir).await, vec![1.0, 0.0, 0.0]);

        match engine.get_similar_participants("Nobody", 3).await {
            Err(Error::ParticipantNotFound { participant }) => assert_eq!(participant, "Nobody"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
