//! Pinecone vector store backend
//!
//! Talks to the Pinecone REST API. The control plane (`/indexes`) manages the
//! index lifecycle; the data plane (the index host) stores and queries
//! vectors in one namespace.

mod filter;
mod wire;

use std::time::Duration;

use async_trait::async_trait;
use insights_domain::constants::SIMILARITY_METRIC;
use insights_domain::error::{Error, Result};
use insights_domain::ports::providers::VectorStoreBackend;
use insights_domain::value_objects::{
    BackendKind, EmbeddingRecord, Filter, SearchResult, VectorStoreStats, rank_results,
};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use filter::translate_filter;
use wire::{
    CreateIndexRequest, DeleteRequest, FetchResponse, IndexDescription, IndexStatsResponse,
    QueryMatch, QueryRequest, QueryResponse, UpsertRequest, UpsertResponse, WireVector,
};

use crate::constants::{
    CONTENT_TYPE_JSON, DEFAULT_HTTP_TIMEOUT_SECS, PINECONE_API_VERSION, PINECONE_CONTROL_URL,
    PINECONE_DEFAULT_BATCH_SIZE, PINECONE_DEFAULT_CLOUD, PINECONE_DEFAULT_INDEX,
    PINECONE_DEFAULT_REGION, PINECONE_MAX_TOP_K, PINECONE_READY_POLL_ATTEMPTS,
    PINECONE_READY_POLL_INTERVAL_MS,
};
use crate::utils::{HttpResponseUtils, ServiceRole};

const PROVIDER_NAME: &str = "pinecone";

/// Pinecone connection settings
#[derive(Debug, Clone)]
pub struct PineconeConfig {
    /// API key sent as `Api-Key`
    pub api_key: String,
    /// Index name
    pub index_name: String,
    /// Namespace all records live in (empty string is the default namespace)
    pub namespace: String,
    /// Vector dimension the index must have
    pub dimension: usize,
    /// Similarity metric the index must use
    pub metric: String,
    /// Serverless cloud used when creating the index
    pub cloud: String,
    /// Serverless region used when creating the index
    pub region: String,
    /// Control plane base URL
    pub control_url: String,
    /// Records per upsert request
    pub batch_size: usize,
    /// Per-request timeout
    pub timeout: Duration,
    /// Readiness checks made after creating an index
    pub ready_poll_attempts: u32,
    /// Delay between readiness checks
    pub ready_poll_interval: Duration,
}

impl PineconeConfig {
    /// Configuration with defaults for everything except credentials and dimension
    pub fn new<S: Into<String>>(api_key: S, dimension: usize) -> Self {
        Self {
            api_key: api_key.into(),
            index_name: PINECONE_DEFAULT_INDEX.to_string(),
            namespace: String::new(),
            dimension,
            metric: SIMILARITY_METRIC.to_string(),
            cloud: PINECONE_DEFAULT_CLOUD.to_string(),
            region: PINECONE_DEFAULT_REGION.to_string(),
            control_url: PINECONE_CONTROL_URL.to_string(),
            batch_size: PINECONE_DEFAULT_BATCH_SIZE,
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            ready_poll_attempts: PINECONE_READY_POLL_ATTEMPTS,
            ready_poll_interval: Duration::from_millis(PINECONE_READY_POLL_INTERVAL_MS),
        }
    }
}

/// Pinecone-backed vector store
///
/// Construct with [`PineconeVectorStore::connect`], which makes sure the
/// index exists with the expected dimension and metric before any data
/// operation runs.
///
/// Upserts are sent in sequential batches of at most `batch_size` records
/// and are never retried; a failing batch is reported as
/// `PartialUpsert` with the number of records already committed. Searches
/// are retried once when the service is unavailable.
pub struct PineconeVectorStore {
    config: PineconeConfig,
    client: Client,
    host: String,
}

impl PineconeVectorStore {
    /// Ensure the index exists and connect to its data plane
    ///
    /// # Errors
    /// * `BackendUnavailable` - the service could not be reached
    /// * `IndexIncompatible` - the index exists with another dimension or metric
    pub async fn connect(config: PineconeConfig, client: Client) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::configuration("Pinecone API key is empty"));
        }
        if config.batch_size == 0 {
            return Err(Error::configuration("Pinecone batch size must be positive"));
        }

        let description = ensure_index(&client, &config).await?;
        let host = normalize_host(&description.host);

        tracing::info!(
            index = %description.name,
            host = %host,
            namespace = %config.namespace,
            "connected to Pinecone index"
        );

        Ok(Self {
            config,
            client,
            host,
        })
    }

    /// Name of the index this store writes to
    pub fn index_name(&self) -> &str {
        &self.config.index_name
    }

    fn with_headers(&self, request: RequestBuilder) -> RequestBuilder {
        authorize(request, &self.config)
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self
            .client
            .post(format!("{}{path}", self.host))
            .json(body);
        let response = self
            .with_headers(request)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::request_error(e, PROVIDER_NAME, ServiceRole::VectorStore))?;
        HttpResponseUtils::check_and_parse(response, PROVIDER_NAME, ServiceRole::VectorStore).await
    }

    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        filter: Option<&serde_json::Value>,
        include_values: bool,
    ) -> Result<Vec<QueryMatch>> {
        let request = QueryRequest {
            vector,
            top_k: top_k.min(PINECONE_MAX_TOP_K),
            include_metadata: true,
            include_values,
            filter: filter.cloned(),
            namespace: &self.config.namespace,
        };
        let response: QueryResponse = self.post("/query", &request).await?;
        Ok(response.matches)
    }

    async fn query_with_retry(
        &self,
        vector: &[f32],
        top_k: usize,
        filter: Option<&serde_json::Value>,
        include_values: bool,
    ) -> Result<Vec<QueryMatch>> {
        match self.query(vector, top_k, filter, include_values).await {
            Err(e) if e.is_retryable() => {
                tracing::debug!(error = %e, "Pinecone query failed, retrying once");
                self.query(vector, top_k, filter, include_values).await
            }
            other => other,
        }
    }

    fn check_dimension(&self, id: Option<&str>, found: usize) -> Result<()> {
        let expected = self.config.dimension;
        if found == expected {
            return Ok(());
        }
        Err(match id {
            Some(id) => Error::dimension_mismatch(id, expected, found),
            None => Error::query_dimension_mismatch(expected, found),
        })
    }

    async fn fetch_exists(&self, id: &str) -> Result<bool> {
        let url = Url::parse_with_params(
            &format!("{}/vectors/fetch", self.host),
            &[("ids", id), ("namespace", self.config.namespace.as_str())],
        )
        .map_err(|e| Error::configuration_with_source("Invalid Pinecone host", e))?;

        let response = self
            .with_headers(self.client.get(url))
            .send()
            .await
            .map_err(|e| HttpResponseUtils::request_error(e, PROVIDER_NAME, ServiceRole::VectorStore))?;
        let body: FetchResponse =
            HttpResponseUtils::check_and_parse(response, PROVIDER_NAME, ServiceRole::VectorStore)
                .await?;
        Ok(body.vectors.contains_key(id))
    }
}

#[async_trait]
impl VectorStoreBackend for PineconeVectorStore {
    async fn upsert(&self, records: Vec<EmbeddingRecord>) -> Result<usize> {
        for record in &records {
            if record.id.is_empty() {
                return Err(Error::invalid_argument("record id must not be empty"));
            }
            self.check_dimension(Some(&record.id), record.dimension())?;
            record.check_finite()?;
        }

        let attempted = records.len();
        let mut committed = 0;
        for batch in records.chunks(self.config.batch_size) {
            let request = UpsertRequest {
                vectors: batch
                    .iter()
                    .map(|r| WireVector {
                        id: &r.id,
                        values: &r.vector,
                        metadata: &r.metadata,
                    })
                    .collect(),
                namespace: &self.config.namespace,
            };

            match self
                .post::<_, UpsertResponse>("/vectors/upsert", &request)
                .await
            {
                Ok(response) => {
                    committed += response.upserted_count.unwrap_or(batch.len());
                    tracing::debug!(committed, attempted, "Pinecone batch committed");
                }
                Err(e) => {
                    tracing::warn!(committed, attempted, error = %e, "Pinecone upsert stopped");
                    return Err(Error::partial_upsert(committed, attempted, e));
                }
            }
        }

        Ok(committed)
    }

    async fn search(
        &self,
        query: &[f32],
        top_k: usize,
        filter: Option<&Filter>,
    ) -> Result<Vec<SearchResult>> {
        self.check_dimension(None, query.len())?;
        let translated = match filter {
            Some(filter) => translate_filter(filter)?,
            None => None,
        };
        if top_k == 0 {
            return Ok(Vec::new());
        }

        let matches = self
            .query_with_retry(query, top_k, translated.as_ref(), false)
            .await?;

        let mut results: Vec<SearchResult> = matches
            .into_iter()
            .map(|m| SearchResult::new(m.id, m.score, m.metadata))
            .collect();
        rank_results(&mut results);
        results.truncate(top_k);
        Ok(results)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        if !self.fetch_exists(id).await? {
            return Ok(false);
        }

        let request = DeleteRequest {
            ids: [id],
            namespace: &self.config.namespace,
        };
        let _: serde_json::Value = self.post("/vectors/delete", &request).await?;
        tracing::debug!(id, "deleted Pinecone vector");
        Ok(true)
    }

    async fn find_by_metadata(&self, filter: &Filter, limit: usize) -> Result<Vec<EmbeddingRecord>> {
        let translated = translate_filter(filter)?;
        if limit == 0 {
            return Ok(Vec::new());
        }

        // Any non-zero probe works: the filter selects, the score is ignored.
        let mut probe = vec![0.0_f32; self.config.dimension];
        if let Some(first) = probe.first_mut() {
            *first = 1.0;
        }

        let matches = self
            .query_with_retry(&probe, limit, translated.as_ref(), true)
            .await?;

        let mut records: Vec<EmbeddingRecord> = matches
            .into_iter()
            .map(|m| EmbeddingRecord::new(m.id, m.values, m.metadata))
            .collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records.truncate(limit);
        Ok(records)
    }

    async fn stats(&self) -> Result<VectorStoreStats> {
        let body: IndexStatsResponse = self
            .post("/describe_index_stats", &serde_json::json!({}))
            .await?;
        let total_vectors = body
            .namespaces
            .get(&self.config.namespace)
            .map_or(0, |ns| ns.vector_count);

        Ok(VectorStoreStats {
            backend: BackendKind::Pinecone,
            total_vectors,
            dimension: body.dimension.or(Some(self.config.dimension)),
            location: self.config.index_name.clone(),
            fallback_reason: None,
        })
    }

    async fn dimension(&self) -> Option<usize> {
        Some(self.config.dimension)
    }

    fn backend_kind(&self) -> BackendKind {
        BackendKind::Pinecone
    }
}

fn authorize(request: RequestBuilder, config: &PineconeConfig) -> RequestBuilder {
    request
        .header("Api-Key", &config.api_key)
        .header("X-Pinecone-API-Version", PINECONE_API_VERSION)
        .header("Content-Type", CONTENT_TYPE_JSON)
        .timeout(config.timeout)
}

fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}

async fn describe_index(client: &Client, config: &PineconeConfig) -> Result<Option<IndexDescription>> {
    let url = format!(
        "{}/indexes/{}",
        config.control_url.trim_end_matches('/'),
        config.index_name
    );
    let response = authorize(client.get(url), config)
        .send()
        .await
        .map_err(|e| HttpResponseUtils::request_error(e, PROVIDER_NAME, ServiceRole::VectorStore))?;

    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    HttpResponseUtils::check_and_parse(response, PROVIDER_NAME, ServiceRole::VectorStore)
        .await
        .map(Some)
}

async fn create_index(client: &Client, config: &PineconeConfig) -> Result<()> {
    let url = format!("{}/indexes", config.control_url.trim_end_matches('/'));
    let request = CreateIndexRequest {
        name: &config.index_name,
        dimension: config.dimension,
        metric: &config.metric,
        spec: serde_json::json!({
            "serverless": { "cloud": config.cloud, "region": config.region }
        }),
    };
    let response = authorize(client.post(url), config)
        .json(&request)
        .send()
        .await
        .map_err(|e| HttpResponseUtils::request_error(e, PROVIDER_NAME, ServiceRole::VectorStore))?;

    // Another process created it first.
    if response.status() == StatusCode::CONFLICT {
        tracing::debug!(index = %config.index_name, "index already being created");
        return Ok(());
    }
    HttpResponseUtils::check_status(response, PROVIDER_NAME, ServiceRole::VectorStore).await?;
    Ok(())
}

/// Make sure the configured index exists with the expected shape
///
/// Creates the index when absent and waits (bounded) until it reports
/// ready. An existing index is never recreated; a dimension or metric
/// conflict fails with `IndexIncompatible`.
pub async fn ensure_index(client: &Client, config: &PineconeConfig) -> Result<IndexDescriptionSummary> {
    let mut description = match describe_index(client, config).await? {
        Some(description) => description,
        None => {
            tracing::info!(
                index = %config.index_name,
                dimension = config.dimension,
                metric = %config.metric,
                "creating Pinecone index"
            );
            create_index(client, config).await?;
            wait_until_described(client, config).await?
        }
    };

    if description.dimension != config.dimension || description.metric != config.metric {
        return Err(Error::IndexIncompatible {
            index: config.index_name.clone(),
            expected_dimension: config.dimension,
            found_dimension: description.dimension,
            expected_metric: config.metric.clone(),
            found_metric: description.metric,
        });
    }

    let mut attempt = 0;
    while !description.status.ready {
        if attempt >= config.ready_poll_attempts {
            return Err(Error::backend_unavailable(
                PROVIDER_NAME,
                format!(
                    "index '{}' not ready after {} checks (state: {})",
                    config.index_name, attempt, description.status.state
                ),
            ));
        }
        attempt += 1;
        tracing::debug!(attempt, state = %description.status.state, "waiting for index");
        tokio::time::sleep(config.ready_poll_interval).await;
        description = wait_until_described(client, config).await?;
    }

    Ok(IndexDescriptionSummary {
        name: description.name,
        dimension: description.dimension,
        metric: description.metric,
        host: description.host,
    })
}

async fn wait_until_described(client: &Client, config: &PineconeConfig) -> Result<IndexDescription> {
    for attempt in 0..=config.ready_poll_attempts {
        if let Some(description) = describe_index(client, config).await? {
            return Ok(description);
        }
        if attempt < config.ready_poll_attempts {
            tokio::time::sleep(config.ready_poll_interval).await;
        }
    }
    Err(Error::backend_unavailable(
        PROVIDER_NAME,
        format!("index '{}' did not appear after creation", config.index_name),
    ))
}

/// Shape of a ready Pinecone index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDescriptionSummary {
    /// Index name
    pub name: String,
    /// Vector dimension
    pub dimension: usize,
    /// Similarity metric
    pub metric: String,
    /// Data plane host
    pub host: String,
}
