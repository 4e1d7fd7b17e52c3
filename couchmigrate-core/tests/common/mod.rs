//! In-memory `DocumentStore` fake with CouchDB-style revision checking.
//!
//! Probes can be scripted to fail a fixed number of times before the index
//! "becomes queryable", which drives the poller through its not-ready
//! steady state without a real index build.

#![allow(dead_code)]

use async_trait::async_trait;
use couchmigrate_core::store::{DocumentStore, IndexTask, StoreError};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct MemoryStore {
    db: String,
    exists: bool,
    docs: Mutex<HashMap<String, Value>>,
    next_rev: AtomicUsize,
    puts: AtomicUsize,
    view_probes: AtomicUsize,
    search_probes: AtomicUsize,
    probes_until_ready: AtomicUsize,
    last_probe: Mutex<Option<(String, String)>>,
    tasks: Mutex<Vec<IndexTask>>,
}

impl MemoryStore {
    pub fn new(db: &str) -> Self {
        Self {
            db: db.to_string(),
            exists: true,
            docs: Mutex::new(HashMap::new()),
            next_rev: AtomicUsize::new(0),
            puts: AtomicUsize::new(0),
            view_probes: AtomicUsize::new(0),
            search_probes: AtomicUsize::new(0),
            probes_until_ready: AtomicUsize::new(0),
            last_probe: Mutex::new(None),
            tasks: Mutex::new(Vec::new()),
        }
    }

    pub fn missing_database(db: &str) -> Self {
        Self {
            exists: false,
            ..Self::new(db)
        }
    }

    /// Script the next `failed_probes` index queries to fail before the
    /// index reports ready.
    pub fn set_ready_after(&self, failed_probes: usize) {
        self.probes_until_ready.store(failed_probes, Ordering::SeqCst);
    }

    pub fn set_tasks(&self, tasks: Vec<IndexTask>) {
        *self.tasks.lock().unwrap() = tasks;
    }

    /// Insert a document directly, assigning it a fresh revision.
    pub fn seed(&self, id: &str, mut doc: Value) {
        let rev = self.bump_rev();
        if let Some(map) = doc.as_object_mut() {
            map.insert("_id".to_string(), Value::String(id.to_string()));
            map.insert("_rev".to_string(), Value::String(rev));
        }
        self.docs.lock().unwrap().insert(id.to_string(), doc);
    }

    pub fn doc(&self, id: &str) -> Option<Value> {
        self.docs.lock().unwrap().get(id).cloned()
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn view_probe_count(&self) -> usize {
        self.view_probes.load(Ordering::SeqCst)
    }

    pub fn search_probe_count(&self) -> usize {
        self.search_probes.load(Ordering::SeqCst)
    }

    pub fn probe_count(&self) -> usize {
        self.view_probe_count() + self.search_probe_count()
    }

    /// The `(design, index)` pair of the most recent probe.
    pub fn last_probe(&self) -> Option<(String, String)> {
        self.last_probe.lock().unwrap().clone()
    }

    fn bump_rev(&self) -> String {
        format!("{}-mem", self.next_rev.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn probe(&self, design: &str, index: &str) -> Result<Value, StoreError> {
        *self.last_probe.lock().unwrap() = Some((design.to_string(), index.to_string()));
        let remaining = self.probes_until_ready.load(Ordering::SeqCst);
        if remaining > 0 {
            if remaining != usize::MAX {
                self.probes_until_ready.store(remaining - 1, Ordering::SeqCst);
            }
            return Err(StoreError::Transport("probe timed out".to_string()));
        }
        Ok(json!({"total_rows": 0, "rows": []}))
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn database(&self) -> &str {
        &self.db
    }

    async fn database_exists(&self) -> Result<bool, StoreError> {
        Ok(self.exists)
    }

    async fn get(&self, id: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.docs.lock().unwrap().get(id).cloned())
    }

    async fn put(&self, doc: &Value) -> Result<String, StoreError> {
        let id = doc
            .get("_id")
            .and_then(Value::as_str)
            .ok_or_else(|| StoreError::InvalidResponse("document has no _id".to_string()))?
            .to_string();
        let supplied_rev = doc.get("_rev").and_then(Value::as_str);

        let mut docs = self.docs.lock().unwrap();
        match docs.get(&id) {
            Some(current) => {
                let current_rev = current.get("_rev").and_then(Value::as_str);
                if supplied_rev != current_rev {
                    return Err(StoreError::Conflict { id });
                }
            }
            None => {
                if supplied_rev.is_some() {
                    return Err(StoreError::Conflict { id });
                }
            }
        }

        let rev = self.bump_rev();
        let mut stored = doc.clone();
        if let Some(map) = stored.as_object_mut() {
            map.insert("_rev".to_string(), Value::String(rev.clone()));
        }
        docs.insert(id, stored);
        self.puts.fetch_add(1, Ordering::SeqCst);
        Ok(rev)
    }

    async fn delete(&self, id: &str, rev: &str) -> Result<(), StoreError> {
        let mut docs = self.docs.lock().unwrap();
        match docs.get(id) {
            None => Err(StoreError::NotFound { id: id.to_string() }),
            Some(current) => {
                if current.get("_rev").and_then(Value::as_str) != Some(rev) {
                    return Err(StoreError::Conflict { id: id.to_string() });
                }
                docs.remove(id);
                Ok(())
            }
        }
    }

    async fn query_view(
        &self,
        design: &str,
        view: &str,
        _limit: usize,
    ) -> Result<Value, StoreError> {
        self.view_probes.fetch_add(1, Ordering::SeqCst);
        self.probe(design, view)
    }

    async fn query_search(
        &self,
        design: &str,
        index: &str,
        _query: &str,
    ) -> Result<Value, StoreError> {
        self.search_probes.fetch_add(1, Ordering::SeqCst);
        self.probe(design, index)
    }

    async fn active_tasks(&self) -> Result<Vec<IndexTask>, StoreError> {
        Ok(self.tasks.lock().unwrap().clone())
    }
}
