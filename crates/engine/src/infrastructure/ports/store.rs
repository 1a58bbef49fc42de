//! Document store port.
//!
//! A flat key-value view of a hosted document database: documents are
//! addressed by collection name and id and hold a JSON object payload.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::StoreError;

/// Payload of a single document (field name -> JSON value).
pub type DocumentData = serde_json::Map<String, serde_json::Value>;

/// A document as returned by a collection listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub data: DocumentData,
}

impl Document {
    pub fn new(id: impl Into<String>, data: DocumentData) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

/// Get/set/delete/list over documents.
///
/// No method is atomic with respect to any other: a `get` followed by a `set`
/// can interleave with other callers' writes, and the last `set` wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document. `Ok(None)` when it does not exist.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<DocumentData>, StoreError>;

    /// Replace the whole document, creating it if absent.
    async fn set(&self, collection: &str, id: &str, data: DocumentData) -> Result<(), StoreError>;

    /// Delete one document. Deleting an absent document succeeds.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// Every document in the collection, in the store's native order.
    async fn list_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;
}
