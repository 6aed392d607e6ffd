//! Tests for embedding providers

#[cfg(test)]
mod null_tests {
    use insights_domain::ports::providers::EmbeddingProvider;
    use insights_providers::embedding::NullEmbeddingProvider;
    use insights_providers::vector_store::cosine_similarity;

    #[tokio::test]
    async fn test_null_embeddings_are_deterministic() {
        let provider = NullEmbeddingProvider::with_dimensions(64);
        let a = provider.embed("Scale my coaching business").await.unwrap();
        let b = provider.embed("Scale my coaching business").await.unwrap();
        assert_eq!(a.vector, b.vector);
        assert_eq!(a.dimensions, 64);
        assert_eq!(provider.dimensions(), 64);
    }

    #[tokio::test]
    async fn test_null_embeddings_reflect_shared_words() {
        let provider = NullEmbeddingProvider::new();
        let query = provider.embed("coaching business growth").await.unwrap();
        let close = provider.embed("growth of a coaching business").await.unwrap();
        let far = provider.embed("knitting patterns tutorial").await.unwrap();

        let close_score = cosine_similarity(&query.vector, &close.vector);
        let far_score = cosine_similarity(&query.vector, &far.vector);
        assert!(close_score > far_score);
    }

    #[tokio::test]
    async fn test_null_embedding_of_empty_text_is_zero() {
        let provider = NullEmbeddingProvider::with_dimensions(8);
        let embedding = provider.embed("  ").await.unwrap();
        assert!(embedding.vector.iter().all(|x| *x == 0.0));
    }
}

#[cfg(test)]
mod gemini_tests {
    use std::time::Duration;

    use insights_domain::Error;
    use insights_domain::ports::providers::EmbeddingProvider;
    use insights_providers::embedding::GeminiEmbeddingProvider;
    use mockito::Server;
    use serde_json::json;

    fn provider(base_url: String) -> GeminiEmbeddingProvider {
        GeminiEmbeddingProvider::new(
            " test-key ".to_string(),
            Some(base_url),
            "models/text-embedding-004".to_string(),
            Duration::from_secs(5),
            reqwest::Client::new(),
        )
    }

    #[tokio::test]
    async fn test_gemini_embed_parses_values() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/text-embedding-004:embedContent")
            .match_header("x-goog-api-key", "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"embedding": {"values": [0.1, 0.2, 0.3]}}).to_string())
            .create_async()
            .await;

        let provider = provider(server.url());
        let embedding = provider.embed("hello").await.unwrap();

        mock.assert_async().await;
        assert_eq!(embedding.vector, vec![0.1, 0.2, 0.3]);
        assert_eq!(embedding.dimensions, 3);
        assert_eq!(provider.api_model_name(), "text-embedding-004");
        assert_eq!(provider.dimensions(), 768);
        assert_eq!(provider.provider_name(), "gemini");
    }

    #[tokio::test]
    async fn test_gemini_failures_are_embedding_unavailable() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/text-embedding-004:embedContent")
            .with_status(429)
            .with_body(json!({"error": {"message": "Quota exceeded"}}).to_string())
            .create_async()
            .await;

        let err = provider(server.url()).embed("hello").await.unwrap_err();
        match err {
            Error::EmbeddingUnavailable { provider, message, .. } => {
                assert_eq!(provider, "gemini");
                assert!(message.contains("rate limit"));
                assert!(message.contains("Quota exceeded"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_gemini_empty_values_are_rejected() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/text-embedding-004:embedContent")
            .with_status(200)
            .with_body(json!({"embedding": {"values": []}}).to_string())
            .create_async()
            .await;

        let err = provider(server.url()).embed("hello").await.unwrap_err();
        assert!(matches!(err, Error::EmbeddingUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_gemini_unreachable_is_embedding_unavailable() {
        let provider = GeminiEmbeddingProvider::new(
            "key".to_string(),
            Some("http://127.0.0.1:9".to_string()),
            "text-embedding-004".to_string(),
            Duration::from_secs(2),
            reqwest::Client::new(),
        );
        let err = provider.embed("hello").await.unwrap_err();
        assert!(matches!(err, Error::EmbeddingUnavailable { .. }));
    }
}
