//! Pinecone REST request and response bodies

use std::collections::HashMap;

use insights_domain::value_objects::Metadata;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub(super) struct IndexDescription {
    pub name: String,
    pub dimension: usize,
    pub metric: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub status: IndexStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct IndexStatus {
    #[serde(default)]
    pub ready: bool,
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Serialize)]
pub(super) struct CreateIndexRequest<'a> {
    pub name: &'a str,
    pub dimension: usize,
    pub metric: &'a str,
    pub spec: Value,
}

#[derive(Debug, Serialize)]
pub(super) struct WireVector<'a> {
    pub id: &'a str,
    pub values: &'a [f32],
    #[serde(skip_serializing_if = "no_metadata")]
    pub metadata: &'a Metadata,
}

fn no_metadata(metadata: &&Metadata) -> bool {
    metadata.is_empty()
}

#[derive(Debug, Serialize)]
pub(super) struct UpsertRequest<'a> {
    pub vectors: Vec<WireVector<'a>>,
    pub namespace: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UpsertResponse {
    #[serde(default)]
    pub upserted_count: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct QueryRequest<'a> {
    pub vector: &'a [f32],
    pub top_k: usize,
    pub include_metadata: bool,
    pub include_values: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    pub namespace: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct QueryResponse {
    #[serde(default)]
    pub matches: Vec<QueryMatch>,
}

#[derive(Debug, Deserialize)]
pub(super) struct QueryMatch {
    pub id: String,
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub values: Vec<f32>,
    #[serde(default)]
    pub metadata: Metadata,
}

#[derive(Debug, Deserialize)]
pub(super) struct FetchResponse {
    #[serde(default)]
    pub vectors: HashMap<String, Value>,
}

#[derive(Debug, Serialize)]
pub(super) struct DeleteRequest<'a> {
    pub ids: [&'a str; 1],
    pub namespace: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IndexStatsResponse {
    #[serde(default)]
    pub namespaces: HashMap<String, NamespaceSummary>,
    #[serde(default)]
    pub dimension: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NamespaceSummary {
    #[serde(default)]
    pub vector_count: usize,
}
