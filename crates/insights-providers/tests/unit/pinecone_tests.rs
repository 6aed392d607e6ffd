//! Tests for the Pinecone backend against a mocked REST API

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use insights_domain::ports::providers::VectorStoreBackend;
    use insights_domain::value_objects::{EmbeddingRecord, Filter, Metadata};
    use insights_domain::{BackendKind, Error};
    use insights_providers::vector_store::{PineconeConfig, PineconeVectorStore};
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;

    const INDEX_PATH: &str = "/indexes/semantic-insights";

    fn config(server: &ServerGuard, dimension: usize) -> PineconeConfig {
        let mut config = PineconeConfig::new("pc-test-key", dimension);
        config.control_url = server.url();
        config.timeout = Duration::from_secs(5);
        config.ready_poll_attempts = 3;
        config.ready_poll_interval = Duration::ZERO;
        config
    }

    fn index_body(server: &ServerGuard, dimension: usize, ready: bool) -> String {
        json!({
            "name": "semantic-insights",
            "dimension": dimension,
            "metric": "cosine",
            "host": server.url(),
            "status": {"ready": ready, "state": if ready { "Ready" } else { "Initializing" }}
        })
        .to_string()
    }

    async fn connected(server: &mut ServerGuard, dimension: usize) -> PineconeVectorStore {
        let body = index_body(server, dimension, true);
        let _describe = server
            .mock("GET", INDEX_PATH)
            .match_header("api-key", "pc-test-key")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;
        PineconeVectorStore::connect(config(server, dimension), reqwest::Client::new())
            .await
            .unwrap()
    }

    fn record(id: &str, vector: Vec<f32>) -> EmbeddingRecord {
        EmbeddingRecord::new(id, vector, Metadata::new()).with_metadata("participant", id)
    }

    #[tokio::test]
    async fn test_connect_uses_existing_index() {
        let mut server = Server::new_async().await;
        let store = connected(&mut server, 3).await;
        assert_eq!(store.index_name(), "semantic-insights");
        assert_eq!(store.backend_kind(), BackendKind::Pinecone);
        assert_eq!(store.dimension().await, Some(3));
    }

    #[tokio::test]
    async fn test_connect_creates_missing_index_and_waits() {
        let mut server = Server::new_async().await;
        let missing = server
            .mock("GET", INDEX_PATH)
            .with_status(404)
            .with_body(json!({"error": {"message": "Not found"}}).to_string())
            .expect(1)
            .create_async()
            .await;
        let create = server
            .mock("POST", "/indexes")
            .match_body(Matcher::PartialJson(json!({
                "name": "semantic-insights",
                "dimension": 3,
                "metric": "cosine",
                "spec": {"serverless": {"cloud": "aws", "region": "us-east-1"}}
            })))
            .with_status(201)
            .with_body(index_body(&server, 3, false))
            .create_async()
            .await;
        let initializing = server
            .mock("GET", INDEX_PATH)
            .with_status(200)
            .with_body(index_body(&server, 3, false))
            .expect(1)
            .create_async()
            .await;
        let ready = server
            .mock("GET", INDEX_PATH)
            .with_status(200)
            .with_body(index_body(&server, 3, true))
            .create_async()
            .await;

        let store = PineconeVectorStore::connect(config(&server, 3), reqwest::Client::new()).await;
        assert!(store.is_ok());

        missing.assert_async().await;
        create.assert_async().await;
        initializing.assert_async().await;
        ready.assert_async().await;
    }

    #[tokio::test]
    async fn test_connect_rejects_incompatible_index() {
        let mut server = Server::new_async().await;
        let body = index_body(&server, 1536, true);
        let _describe = server
            .mock("GET", INDEX_PATH)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;
        let create = server
            .mock("POST", "/indexes")
            .expect(0)
            .create_async()
            .await;

        let err = PineconeVectorStore::connect(config(&server, 768), reqwest::Client::new())
            .await
            .err()
            .unwrap();
        match err {
            Error::IndexIncompatible {
                expected_dimension,
                found_dimension,
                ..
            } => {
                assert_eq!(expected_dimension, 768);
                assert_eq!(found_dimension, 1536);
            }
            other => panic!("unexpected error: {other}"),
        }
        create.assert_async().await;
    }

    #[tokio::test]
    async fn test_connect_unreachable_is_backend_unavailable() {
        let mut config = PineconeConfig::new("pc-test-key", 3);
        config.control_url = "http://127.0.0.1:9".to_string();
        config.timeout = Duration::from_secs(2);

        let err = PineconeVectorStore::connect(config, reqwest::Client::new())
            .await
            .err()
            .unwrap();
        assert!(err.is_retryable(), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn test_connect_auth_failure_is_backend_unavailable() {
        let mut server = Server::new_async().await;
        let _describe = server
            .mock("GET", INDEX_PATH)
            .with_status(401)
            .with_body(json!({"error": {"message": "Invalid API key"}}).to_string())
            .create_async()
            .await;

        let err = PineconeVectorStore::connect(config(&server, 3), reqwest::Client::new())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, Error::BackendUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_upsert_rejects_wrong_dimension_before_sending() {
        let mut server = Server::new_async().await;
        let store = connected(&mut server, 3).await;
        let upsert = server
            .mock("POST", "/vectors/upsert")
            .expect(0)
            .create_async()
            .await;

        let err = store
            .upsert(vec![record("a", vec![1.0, 0.0, 0.0]), record("b", vec![1.0])])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
        upsert.assert_async().await;
    }

    #[tokio::test]
    async fn test_upsert_rejects_non_finite_values_before_sending() {
        let mut server = Server::new_async().await;
        let store = connected(&mut server, 2).await;
        let upsert = server
            .mock("POST", "/vectors/upsert")
            .expect(0)
            .create_async()
            .await;

        let err = store
            .upsert(vec![record("a", vec![1.0, 0.0]), record("b", vec![f32::INFINITY, 0.0])])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert_eq!(err.committed(), None);
        upsert.assert_async().await;
    }

    #[tokio::test]
    async fn test_partial_batch_failure_reports_committed() {
        let mut server = Server::new_async().await;
        let mut cfg = config(&server, 2);
        cfg.batch_size = 1;
        let body = index_body(&server, 2, true);
        let _describe = server
            .mock("GET", INDEX_PATH)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;
        let store = PineconeVectorStore::connect(cfg, reqwest::Client::new())
            .await
            .unwrap();

        let mut accepted = Vec::new();
        for id in ["a", "b"] {
            accepted.push(
                server
                    .mock("POST", "/vectors/upsert")
                    .match_body(Matcher::Regex(format!(r#""id":"{id}""#)))
                    .with_status(200)
                    .with_body(json!({"upsertedCount": 1}).to_string())
                    .expect(1)
                    .create_async()
                    .await,
            );
        }
        let failing = server
            .mock("POST", "/vectors/upsert")
            .match_body(Matcher::Regex(r#""id":"c""#.to_string()))
            .with_status(500)
            .with_body("internal error")
            .expect(1)
            .create_async()
            .await;
        let never_sent = server
            .mock("POST", "/vectors/upsert")
            .match_body(Matcher::Regex(r#""id":"[de]""#.to_string()))
            .expect(0)
            .create_async()
            .await;
        let _stats = server
            .mock("POST", "/describe_index_stats")
            .with_status(200)
            .with_body(
                json!({
                    "namespaces": {"": {"vectorCount": 2}},
                    "dimension": 2,
                    "totalVectorCount": 2
                })
                .to_string(),
            )
            .create_async()
            .await;

        let records = ["a", "b", "c", "d", "e"]
            .into_iter()
            .map(|id| record(id, vec![1.0, 0.5]))
            .collect();
        let err = store.upsert(records).await.unwrap_err();

        match &err {
            Error::PartialUpsert {
                committed,
                attempted,
                source,
            } => {
                assert_eq!(*committed, 2);
                assert_eq!(*attempted, 5);
                assert!(source.is_retryable());
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.committed(), Some(2));

        for mock in accepted {
            mock.assert_async().await;
        }
        failing.assert_async().await;
        never_sent.assert_async().await;

        let stats = store.stats().await.unwrap();
        assert_eq!(stats.backend, BackendKind::Pinecone);
        assert_eq!(stats.total_vectors, 2);
        assert_eq!(stats.location, "semantic-insights");
    }

    #[tokio::test]
    async fn test_first_batch_failure_is_still_partial() {
        let mut server = Server::new_async().await;
        let store = connected(&mut server, 2).await;
        let _upsert = server
            .mock("POST", "/vectors/upsert")
            .with_status(400)
            .with_body(json!({"message": "bad vector"}).to_string())
            .create_async()
            .await;

        let err = store
            .upsert(vec![record("a", vec![1.0, 0.0])])
            .await
            .unwrap_err();
        match err {
            Error::PartialUpsert {
                committed, source, ..
            } => {
                assert_eq!(committed, 0);
                assert!(matches!(*source, Error::VectorDb { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_search_translates_filter_and_reorders() {
        let mut server = Server::new_async().await;
        let store = connected(&mut server, 2).await;
        let query = server
            .mock("POST", "/query")
            .match_header("x-pinecone-api-version", "2024-07")
            .match_body(Matcher::PartialJson(json!({
                "topK": 2,
                "includeMetadata": true,
                "filter": {"$and": [
                    {"business_focus": {"$in": ["coaching"]}},
                    {"urgency_level": {"$gte": 4.0}}
                ]}
            })))
            .with_status(200)
            .with_body(
                json!({"matches": [
                    {"id": "z", "score": 0.8, "metadata": {"urgency_level": 5.0}},
                    {"id": "b", "score": 0.8, "metadata": {"urgency_level": 4.0}},
                    {"id": "q", "score": 0.95, "metadata": {"urgency_level": 4.0}}
                ]})
                .to_string(),
            )
            .create_async()
            .await;

        let filter = Filter::new()
            .any_of("business_focus", ["coaching"])
            .gte("urgency_level", 4.0);
        let results = store.search(&[1.0, 0.0], 2, Some(&filter)).await.unwrap();

        query.assert_async().await;
        let ids: Vec<_> = results.iter().map(|r| r.record_id.as_str()).collect();
        assert_eq!(ids, ["q", "b"]);
    }

    #[tokio::test]
    async fn test_unsupported_filter_sends_nothing() {
        let mut server = Server::new_async().await;
        let store = connected(&mut server, 2).await;
        let query = server.mock("POST", "/query").expect(0).create_async().await;

        let filter = Filter::new().eq("key_emotions", vec!["anxious".to_string()]);
        let err = store
            .search(&[1.0, 0.0], 5, Some(&filter))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFilter { .. }));
        query.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_retries_once_when_unavailable() {
        let mut server = Server::new_async().await;
        let store = connected(&mut server, 2).await;
        let unavailable = server
            .mock("POST", "/query")
            .with_status(503)
            .expect(1)
            .create_async()
            .await;
        let recovered = server
            .mock("POST", "/query")
            .with_status(200)
            .with_body(json!({"matches": [{"id": "a", "score": 0.5}]}).to_string())
            .expect(1)
            .create_async()
            .await;

        let results = store.search(&[1.0, 0.0], 5, None).await.unwrap();
        assert_eq!(results.len(), 1);
        unavailable.assert_async().await;
        recovered.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_gives_up_after_one_retry() {
        let mut server = Server::new_async().await;
        let store = connected(&mut server, 2).await;
        let unavailable = server
            .mock("POST", "/query")
            .with_status(503)
            .expect(2)
            .create_async()
            .await;

        let err = store.search(&[1.0, 0.0], 5, None).await.unwrap_err();
        assert!(matches!(err, Error::BackendUnavailable { .. }));
        unavailable.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_fetches_first() {
        let mut server = Server::new_async().await;
        let store = connected(&mut server, 2).await;
        let _absent = server
            .mock("GET", "/vectors/fetch")
            .match_query(Matcher::UrlEncoded("ids".into(), "gone".into()))
            .with_status(200)
            .with_body(json!({"vectors": {}}).to_string())
            .create_async()
            .await;
        let _present = server
            .mock("GET", "/vectors/fetch")
            .match_query(Matcher::UrlEncoded("ids".into(), "here".into()))
            .with_status(200)
            .with_body(json!({"vectors": {"here": {"id": "here", "values": [1.0, 0.0]}}}).to_string())
            .create_async()
            .await;
        let delete = server
            .mock("POST", "/vectors/delete")
            .match_body(Matcher::PartialJson(json!({"ids": ["here"]})))
            .with_status(200)
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;

        assert!(!store.delete("gone").await.unwrap());
        assert!(store.delete("here").await.unwrap());
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_find_by_metadata_requests_values() {
        let mut server = Server::new_async().await;
        let store = connected(&mut server, 2).await;
        let _query = server
            .mock("POST", "/query")
            .match_body(Matcher::PartialJson(json!({
                "includeValues": true,
                "filter": {"participant": {"$eq": "Sarah"}}
            })))
            .with_status(200)
            .with_body(
                json!({"matches": [
                    {"id": "s2", "score": 0.1, "values": [0.0, 1.0], "metadata": {"participant": "Sarah"}},
                    {"id": "s1", "score": 0.9, "values": [1.0, 0.0], "metadata": {"participant": "Sarah"}}
                ]})
                .to_string(),
            )
            .create_async()
            .await;

        let found = store
            .find_by_metadata(&Filter::new().eq("participant", "Sarah"), 10)
            .await
            .unwrap();
        let ids: Vec<_> = found.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["s1", "s2"]);
        assert_eq!(found[0].vector, vec![1.0, 0.0]);
    }
}
