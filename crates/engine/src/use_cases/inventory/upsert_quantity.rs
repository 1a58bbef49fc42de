//! Upsert quantity use case.
//!
//! Adds to an item's count, creating the item when it does not exist.

use std::sync::Arc;

use pantry_domain::{validate_delta, InventoryChange, ItemName, QuantityChange};

use crate::repositories::Inventory;

use super::error::InventoryError;

/// Upsert quantity use case.
///
/// Orchestrates: read current quantity, add, write the whole document back.
/// The read and the write are separate store calls with nothing in between
/// to stop another caller's write from landing first, so two concurrent
/// upserts of one name can lose an increment (last write wins).
pub struct UpsertQuantity {
    inventory: Arc<Inventory>,
}

impl UpsertQuantity {
    pub fn new(inventory: Arc<Inventory>) -> Self {
        Self { inventory }
    }

    /// Execute the upsert.
    ///
    /// # Arguments
    /// * `name` - Item (document id) to add to
    /// * `delta` - Amount to add, at least 1
    ///
    /// # Returns
    /// * `Ok(InventoryChange::Created)` - Item was absent and now holds `delta`
    /// * `Ok(InventoryChange::Updated)` - Item now holds `current + delta`
    /// * `Err(InventoryError)` - Invalid delta, malformed document or store failure
    pub async fn execute(
        &self,
        name: &ItemName,
        delta: i64,
    ) -> Result<InventoryChange, InventoryError> {
        let delta = validate_delta(delta)?;

        match self.inventory.quantity(name).await? {
            Some(current) => {
                let quantity = QuantityChange::increment(current, delta)?;
                self.inventory.write_quantity(name, quantity).await?;
                tracing::info!(name = %name, from = current, to = quantity, "Increased item quantity");
                Ok(InventoryChange::Updated { quantity })
            }
            None => {
                self.inventory.write_quantity(name, delta).await?;
                tracing::info!(name = %name, quantity = delta, "Created item");
                Ok(InventoryChange::Created { quantity: delta })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{DocumentData, MockDocumentStore, StoreError};
    use serde_json::{json, Value};

    fn data(value: Value) -> DocumentData {
        value.as_object().cloned().unwrap()
    }

    fn use_case(store: MockDocumentStore) -> UpsertQuantity {
        UpsertQuantity::new(Arc::new(Inventory::new(Arc::new(store))))
    }

    fn eggs() -> ItemName {
        ItemName::new("eggs").unwrap()
    }

    #[tokio::test]
    async fn when_absent_creates_with_delta() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get()
            .withf(|collection, id| collection == "inventory" && id == "eggs")
            .returning(|_, _| Ok(None));
        store
            .expect_set()
            .withf(|collection, id, payload| {
                collection == "inventory" && id == "eggs" && *payload == data(json!({"quantity": 12}))
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let result = use_case(store).execute(&eggs(), 12).await.unwrap();

        assert_eq!(result, InventoryChange::Created { quantity: 12 });
    }

    #[tokio::test]
    async fn when_present_adds_and_drops_other_fields() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get()
            .returning(|_, _| Ok(Some(data(json!({"quantity": 12, "shelf": "top"})))));
        store
            .expect_set()
            .withf(|_, id, payload| id == "eggs" && *payload == data(json!({"quantity": 15})))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let result = use_case(store).execute(&eggs(), 3).await.unwrap();

        assert_eq!(result, InventoryChange::Updated { quantity: 15 });
    }

    #[tokio::test]
    async fn when_delta_not_positive_touches_nothing() {
        // No expectations: any store call would panic.
        let store = MockDocumentStore::new();

        let result = use_case(store).execute(&eggs(), 0).await;

        assert!(matches!(result, Err(InventoryError::Validation(_))));
    }

    #[tokio::test]
    async fn when_sum_overflows_nothing_is_written() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get()
            .returning(|_, _| Ok(Some(data(json!({"quantity": i64::MAX})))));
        store.expect_set().never();

        let result = use_case(store).execute(&eggs(), 1).await;

        assert!(matches!(result, Err(InventoryError::Validation(_))));
    }

    #[tokio::test]
    async fn when_document_malformed_returns_error() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get()
            .returning(|_, _| Ok(Some(data(json!({"qty": 3})))));
        store.expect_set().never();

        let result = use_case(store).execute(&eggs(), 1).await;

        assert!(matches!(result, Err(InventoryError::MalformedDocument { .. })));
    }

    #[tokio::test]
    async fn when_write_fails_error_propagates() {
        let mut store = MockDocumentStore::new();
        store.expect_get().returning(|_, _| Ok(None));
        store
            .expect_set()
            .returning(|_, _, _| Err(StoreError::unavailable("set", "timed out")));

        let result = use_case(store).execute(&eggs(), 1).await;

        assert!(matches!(result, Err(InventoryError::Store(StoreError::Unavailable { .. }))));
    }
}
