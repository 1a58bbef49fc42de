//! Inventory API Port - object-safe boundary to the engine
//!
//! One method per inventory operation. None of them return a refreshed
//! listing; callers decide when to call `list` again.

use async_trait::async_trait;
use pantry_domain::{DomainError, InventoryChange, InventoryItem, ItemName};

/// Errors talking to the engine.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Engine returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to decode response: {0}")]
    Decode(String),
    #[error("Invalid engine URL: {0}")]
    InvalidUrl(String),
}

impl From<DomainError> for ClientError {
    fn from(e: DomainError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryApiPort: Send + Sync {
    async fn list(&self) -> Result<Vec<InventoryItem>, ClientError>;

    async fn add(&self, name: &ItemName, quantity: i64) -> Result<InventoryChange, ClientError>;

    async fn remove(&self, name: &ItemName, quantity: i64)
        -> Result<InventoryChange, ClientError>;

    async fn rename(
        &self,
        old_name: &ItemName,
        new_name: &ItemName,
    ) -> Result<InventoryChange, ClientError>;

    async fn delete(&self, name: &ItemName) -> Result<InventoryChange, ClientError>;
}
