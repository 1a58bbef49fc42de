//! Decrement-or-delete use case.
//!
//! Takes some amount away from an item, deleting it once nothing is left.

use std::sync::Arc;

use pantry_domain::{validate_delta, InventoryChange, ItemName, QuantityChange};

use crate::repositories::Inventory;

use super::error::InventoryError;

/// Decrement-or-delete use case.
///
/// Same read-then-write shape as the upsert, with the same lost-update risk
/// under concurrent calls. A quantity of zero or less is never written; the
/// document is deleted instead.
pub struct DecrementOrDelete {
    inventory: Arc<Inventory>,
}

impl DecrementOrDelete {
    pub fn new(inventory: Arc<Inventory>) -> Self {
        Self { inventory }
    }

    /// Execute the decrement.
    ///
    /// # Returns
    /// * `Ok(InventoryChange::Unchanged)` - Item did not exist
    /// * `Ok(InventoryChange::Deleted)` - Stored quantity was `<= delta`
    /// * `Ok(InventoryChange::Updated)` - Item now holds `current - delta`
    pub async fn execute(
        &self,
        name: &ItemName,
        delta: i64,
    ) -> Result<InventoryChange, InventoryError> {
        let delta = validate_delta(delta)?;

        let Some(current) = self.inventory.quantity(name).await? else {
            tracing::debug!(name = %name, "Decrement of absent item ignored");
            return Ok(InventoryChange::Unchanged);
        };

        match QuantityChange::decrement(current, delta) {
            QuantityChange::Depleted => {
                self.inventory.delete(name).await?;
                tracing::info!(name = %name, from = current, "Item depleted, deleted");
                Ok(InventoryChange::Deleted)
            }
            QuantityChange::Updated(quantity) => {
                self.inventory.write_quantity(name, quantity).await?;
                tracing::info!(name = %name, from = current, to = quantity, "Decreased item quantity");
                Ok(InventoryChange::Updated { quantity })
            }
        }
    }
}
