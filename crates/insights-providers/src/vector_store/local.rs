//! Local vector store backend
//!
//! Keeps every record in memory and persists the full state to a single JSON
//! file after each mutation. Search is an exhaustive cosine scan.
//!
//! File layout:
//!
//! ```json
//! { "dimension": 768, "records": { "<id>": { "vector": [..], "metadata": {..} } } }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use insights_domain::error::{Error, Result};
use insights_domain::ports::providers::VectorStoreBackend;
use insights_domain::value_objects::{
    BackendKind, EmbeddingRecord, Filter, Metadata, SearchResult, VectorStoreStats, passes,
    rank_results,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::constants::LOCAL_TEMP_SUFFIX;
use crate::vector_store::similarity::{compute_norm, cosine_similarity_with_norm};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRecord {
    vector: Vec<f32>,
    #[serde(default)]
    metadata: Metadata,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreState {
    dimension: Option<usize>,
    #[serde(default)]
    records: BTreeMap<String, StoredRecord>,
}

/// Previous values of the entries touched by a mutation
struct Undo {
    dimension: Option<usize>,
    entries: Vec<(String, Option<StoredRecord>)>,
}

impl Undo {
    fn apply(self, state: &mut StoreState) {
        for (id, previous) in self.entries.into_iter().rev() {
            match previous {
                Some(record) => {
                    state.records.insert(id, record);
                }
                None => {
                    state.records.remove(&id);
                }
            }
        }
        state.dimension = self.dimension;
    }
}

// File utility helpers
mod file_utils {
    use insights_domain::error::{Error, Result};
    use serde::{Serialize, de::DeserializeOwned};
    use std::path::Path;

    pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::io_with_source(
                    format!("Failed to read {}", path.display()),
                    e,
                ));
            }
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Write to a sibling temp file, then rename over the target
    pub async fn write_json_atomic<T: Serialize>(
        path: &Path,
        temp_path: &Path,
        data: &T,
    ) -> Result<()> {
        let content = serde_json::to_vec(data)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io_with_source(format!("Failed to create {}", parent.display()), e)
            })?;
        }
        tokio::fs::write(temp_path, content).await.map_err(|e| {
            Error::io_with_source(format!("Failed to write {}", temp_path.display()), e)
        })?;
        tokio::fs::rename(temp_path, path)
            .await
            .map_err(|e| Error::io_with_source(format!("Failed to replace {}", path.display()), e))
    }
}

/// Validate a batch against the established dimension
///
/// Returns the dimension the store has after the batch is applied.
fn validate_batch(established: Option<usize>, records: &[EmbeddingRecord]) -> Result<Option<usize>> {
    let Some(expected) = established.or_else(|| records.first().map(EmbeddingRecord::dimension))
    else {
        return Ok(None);
    };

    for record in records {
        if record.id.is_empty() {
            return Err(Error::invalid_argument("record id must not be empty"));
        }
        if expected == 0 {
            return Err(Error::invalid_argument(format!(
                "record '{}' has an empty vector",
                record.id
            )));
        }
        if record.dimension() != expected {
            return Err(Error::dimension_mismatch(
                record.id.clone(),
                expected,
                record.dimension(),
            ));
        }
        record.check_finite()?;
    }
    Ok(Some(expected))
}

/// Local file-backed vector store
///
/// A single `RwLock` guards the whole state, so readers never observe a
/// partially applied batch. When persisting fails the in-memory change is
/// rolled back and memory keeps matching the file.
///
/// ## Example
///
/// ```rust,no_run
/// use insights_providers::vector_store::LocalVectorStore;
///
/// # async fn example() -> insights_domain::Result<()> {
/// let store = LocalVectorStore::open("data/vector_store.json").await?;
/// # Ok(())
/// # }
/// ```
pub struct LocalVectorStore {
    path: PathBuf,
    temp_path: PathBuf,
    state: RwLock<StoreState>,
}

impl LocalVectorStore {
    /// Open a store, loading existing state from `path`
    ///
    /// A missing file is an empty store. A file whose records disagree on
    /// dimension fails with `DimensionMismatch`.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let state = match file_utils::read_json::<StoreState>(&path).await? {
            Some(state) => Self::check_loaded(state)?,
            None => StoreState::default(),
        };

        tracing::info!(
            path = %path.display(),
            records = state.records.len(),
            dimension = ?state.dimension,
            "local vector store opened"
        );

        let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
        temp_name.push(".");
        temp_name.push(LOCAL_TEMP_SUFFIX);
        let temp_path = path.with_file_name(temp_name);

        Ok(Self {
            path,
            temp_path,
            state: RwLock::new(state),
        })
    }

    fn check_loaded(mut state: StoreState) -> Result<StoreState> {
        let records: Vec<EmbeddingRecord> = state
            .records
            .iter()
            .map(|(id, stored)| EmbeddingRecord::new(id.clone(), stored.vector.clone(), Metadata::new()))
            .collect();
        state.dimension = validate_batch(state.dimension, &records)?;
        if state.records.is_empty() {
            state.dimension = None;
        }
        Ok(state)
    }

    /// Path of the storage file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, state: &StoreState) -> Result<()> {
        file_utils::write_json_atomic(&self.path, &self.temp_path, state).await
    }
}

#[async_trait]
impl VectorStoreBackend for LocalVectorStore {
    async fn upsert(&self, records: Vec<EmbeddingRecord>) -> Result<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut state = self.state.write().await;
        let dimension = validate_batch(state.dimension, &records)?;

        let mut undo = Undo {
            dimension: state.dimension,
            entries: Vec::with_capacity(records.len()),
        };
        let count = records.len();
        for record in records {
            let previous = state.records.insert(
                record.id.clone(),
                StoredRecord {
                    vector: record.vector,
                    metadata: record.metadata,
                },
            );
            undo.entries.push((record.id, previous));
        }
        state.dimension = dimension;

        if let Err(e) = self.persist(&state).await {
            tracing::warn!(error = %e, "persisting local vector store failed, rolling back");
            undo.apply(&mut state);
            return Err(e);
        }

        tracing::debug!(count, total = state.records.len(), "upserted records");
        Ok(count)
    }

    async fn search(
        &self,
        query: &[f32],
        top_k: usize,
        filter: Option<&Filter>,
    ) -> Result<Vec<SearchResult>> {
        let state = self.state.read().await;
        let Some(dimension) = state.dimension else {
            return Ok(Vec::new());
        };
        if query.len() != dimension {
            return Err(Error::query_dimension_mismatch(dimension, query.len()));
        }
        if query.iter().any(|x| !x.is_finite()) {
            return Err(Error::invalid_argument("query vector has non-finite components"));
        }
        if top_k == 0 {
            return Ok(Vec::new());
        }

        let query_norm = compute_norm(query);
        let mut results: Vec<SearchResult> = state
            .records
            .iter()
            .filter(|(_, stored)| passes(filter, &stored.metadata))
            .map(|(id, stored)| {
                let score = cosine_similarity_with_norm(query, &stored.vector, query_norm);
                SearchResult::new(id.clone(), score, stored.metadata.clone())
            })
            .collect();

        rank_results(&mut results);
        results.truncate(top_k);
        Ok(results)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut state = self.state.write().await;
        let Some(removed) = state.records.remove(id) else {
            return Ok(false);
        };

        let undo = Undo {
            dimension: state.dimension,
            entries: vec![(id.to_string(), Some(removed))],
        };
        if state.records.is_empty() {
            state.dimension = None;
        }

        if let Err(e) = self.persist(&state).await {
            tracing::warn!(error = %e, id, "persisting local vector store failed, rolling back");
            undo.apply(&mut state);
            return Err(e);
        }

        tracing::debug!(id, "deleted record");
        Ok(true)
    }

    async fn find_by_metadata(&self, filter: &Filter, limit: usize) -> Result<Vec<EmbeddingRecord>> {
        let state = self.state.read().await;
        Ok(state
            .records
            .iter()
            .filter(|(_, stored)| filter.matches(&stored.metadata))
            .take(limit)
            .map(|(id, stored)| {
                EmbeddingRecord::new(id.clone(), stored.vector.clone(), stored.metadata.clone())
            })
            .collect())
    }

    async fn stats(&self) -> Result<VectorStoreStats> {
        let state = self.state.read().await;
        Ok(VectorStoreStats {
            backend: BackendKind::Local,
            total_vectors: state.records.len(),
            dimension: state.dimension,
            location: self.path.display().to_string(),
            fallback_reason: None,
        })
    }

    async fn dimension(&self) -> Option<usize> {
        self.state.read().await.dimension
    }

    fn backend_kind(&self) -> BackendKind {
        BackendKind::Local
    }
}
