//! [`DocumentStore`] implementation for [`CouchClient`].

use crate::client::CouchClient;
use crate::error::ClientError;
use async_trait::async_trait;
use couchmigrate_core::store::{DocumentStore, IndexTask, StoreError};
use serde_json::Value;

impl From<ClientError> for StoreError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Conflict(id) => StoreError::Conflict { id },
            ClientError::NotFound(id) => StoreError::NotFound { id },
            ClientError::InvalidResponse(msg) => StoreError::InvalidResponse(msg),
            other => StoreError::Transport(other.to_string()),
        }
    }
}

#[async_trait]
impl DocumentStore for CouchClient {
    fn database(&self) -> &str {
        self.database_name()
    }

    async fn database_exists(&self) -> Result<bool, StoreError> {
        Ok(CouchClient::database_exists(self).await?)
    }

    async fn get(&self, id: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.get_doc(id).await?)
    }

    async fn put(&self, doc: &Value) -> Result<String, StoreError> {
        Ok(self.put_doc(doc).await?)
    }

    async fn delete(&self, id: &str, rev: &str) -> Result<(), StoreError> {
        Ok(self.delete_doc(id, rev).await?)
    }

    async fn query_view(
        &self,
        design: &str,
        view: &str,
        limit: usize,
    ) -> Result<Value, StoreError> {
        Ok(CouchClient::query_view(self, design, view, limit).await?)
    }

    async fn query_search(
        &self,
        design: &str,
        index: &str,
        query: &str,
    ) -> Result<Value, StoreError> {
        Ok(CouchClient::query_search(self, design, index, query).await?)
    }

    async fn active_tasks(&self) -> Result<Vec<IndexTask>, StoreError> {
        Ok(CouchClient::active_tasks(self).await?)
    }
}
