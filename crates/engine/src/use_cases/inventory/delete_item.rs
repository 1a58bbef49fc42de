//! Delete item use case.

use std::sync::Arc;

use pantry_domain::{InventoryChange, ItemName};

use crate::repositories::Inventory;

use super::error::InventoryError;

/// Remove an item outright, whatever its quantity.
///
/// Deleting an absent item succeeds; the store treats it as a no-op.
pub struct DeleteItem {
    inventory: Arc<Inventory>,
}

impl DeleteItem {
    pub fn new(inventory: Arc<Inventory>) -> Self {
        Self { inventory }
    }

    pub async fn execute(&self, name: &ItemName) -> Result<InventoryChange, InventoryError> {
        self.inventory.delete(name).await?;
        tracing::info!(name = %name, "Deleted item");
        Ok(InventoryChange::Deleted)
    }
}
