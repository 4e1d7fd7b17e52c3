//! Document store capability surface consumed by the migration.
//!
//! The migration never talks to the network itself; it drives whatever
//! implements [`DocumentStore`]. The HTTP implementation lives in
//! `couchmigrate-client`, and tests use an in-memory map.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by a [`DocumentStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Optimistic-concurrency revision mismatch on a write or delete.
    /// Never retried silently; a retry requires re-fetching the revision.
    #[error("write conflict on '{id}'")]
    Conflict {
        /// Identifier of the document that conflicted.
        id: String,
    },

    /// Document not present.
    #[error("'{id}' not found")]
    NotFound {
        /// Identifier that was not found.
        id: String,
    },

    /// Network failure, request timeout, or unreachable store.
    #[error("transport error: {0}")]
    Transport(String),

    /// Response could not be parsed as expected.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl StoreError {
    /// True for the condition the staging primitives treat as "already done".
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Kind of background task reported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TaskKind {
    /// View index build.
    #[serde(rename = "indexer")]
    Indexer,
    /// Search index build. These register in the active task list later
    /// than view builds.
    #[serde(rename = "search_indexer")]
    SearchIndexer,
    /// Any other active task (compaction, replication, ...); ignored.
    #[serde(other)]
    Other,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Indexer => "indexer",
            TaskKind::SearchIndexer => "search_indexer",
            TaskKind::Other => "other",
        }
    }
}

/// One in-progress background task, as reported by `_active_tasks`.
///
/// Transient and store-owned; the migration reads these only to report
/// approximate index-build progress.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexTask {
    #[serde(rename = "type")]
    pub kind: TaskKind,
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub design_document: String,
    #[serde(default)]
    pub changes_done: u64,
    #[serde(default)]
    pub total_changes: u64,
}

impl IndexTask {
    /// Whether this task is an index build at all.
    pub fn is_index_build(&self) -> bool {
        matches!(self.kind, TaskKind::Indexer | TaskKind::SearchIndexer)
    }

    /// Whether this task runs against `db`.
    ///
    /// Clustered stores report the owning database as a shard path
    /// (`shards/00000000-1fffffff/<db>.1642393871`) rather than the plain
    /// name, so both forms are accepted.
    pub fn is_for_database(&self, db: &str) -> bool {
        self.database == db || self.database.contains(&format!("/{db}."))
    }
}

/// Capability surface the migration needs from the database.
///
/// A store handle is scoped to one database; only [`active_tasks`] is
/// cluster-wide.
///
/// [`active_tasks`]: DocumentStore::active_tasks
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the database this handle is scoped to.
    fn database(&self) -> &str;

    /// Whether the database exists.
    async fn database_exists(&self) -> Result<bool, StoreError>;

    /// Fetch a document by id. Absence is `Ok(None)`, not an error.
    async fn get(&self, id: &str) -> Result<Option<Value>, StoreError>;

    /// Write a document (`_id` required; `_rev` required when updating an
    /// existing document). Returns the new revision token.
    async fn put(&self, doc: &Value) -> Result<String, StoreError>;

    /// Delete a document at a known revision.
    async fn delete(&self, id: &str, rev: &str) -> Result<(), StoreError>;

    /// Query one view of a design document with a result limit.
    async fn query_view(&self, design: &str, view: &str, limit: usize)
        -> Result<Value, StoreError>;

    /// Query one search index of a design document.
    async fn query_search(&self, design: &str, index: &str, query: &str)
        -> Result<Value, StoreError>;

    /// List active background tasks across the cluster.
    async fn active_tasks(&self) -> Result<Vec<IndexTask>, StoreError>;
}
