//! Rename item use case.
//!
//! The name is the document id, so a rename copies the payload to a new
//! document and deletes the old one.

use std::sync::Arc;

use pantry_domain::{InventoryChange, ItemName};

use crate::repositories::Inventory;

use super::error::InventoryError;

/// Rename item use case.
///
/// Orchestrates: read old payload, write it under the new name (replacing
/// whatever was there, no merge), delete the old document.
///
/// The copy and the delete are two independent store calls. If the delete
/// fails the error is returned and both documents remain; there is no
/// rollback and no retry.
pub struct RenameItem {
    inventory: Arc<Inventory>,
}

impl RenameItem {
    pub fn new(inventory: Arc<Inventory>) -> Self {
        Self { inventory }
    }

    /// Execute the rename.
    ///
    /// # Returns
    /// * `Ok(InventoryChange::Renamed)` - Payload moved to `new_name`
    /// * `Ok(InventoryChange::Unchanged)` - `old_name` absent (nothing touched),
    ///   or the names are equal
    /// * `Err(InventoryError)` - Store failure at any step
    pub async fn execute(
        &self,
        old_name: &ItemName,
        new_name: &ItemName,
    ) -> Result<InventoryChange, InventoryError> {
        // Copy-then-delete onto the same id would delete the item.
        if old_name == new_name {
            return Ok(InventoryChange::Unchanged);
        }

        let Some(payload) = self.inventory.payload(old_name).await? else {
            tracing::debug!(old_name = %old_name, new_name = %new_name, "Rename of absent item ignored");
            return Ok(InventoryChange::Unchanged);
        };

        self.inventory.write_payload(new_name, payload).await?;

        if let Err(e) = self.inventory.delete(old_name).await {
            tracing::warn!(
                error = %e,
                old_name = %old_name,
                new_name = %new_name,
                "Rename copied item but failed to delete the old document; both now exist"
            );
            return Err(e.into());
        }

        tracing::info!(old_name = %old_name, new_name = %new_name, "Renamed item");
        Ok(InventoryChange::Renamed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{DocumentData, MockDocumentStore, StoreError};
    use mockall::Sequence;
    use serde_json::{json, Value};

    fn data(value: Value) -> DocumentData {
        value.as_object().cloned().unwrap()
    }

    fn use_case(store: MockDocumentStore) -> RenameItem {
        RenameItem::new(Arc::new(Inventory::new(Arc::new(store))))
    }

    fn name(s: &str) -> ItemName {
        ItemName::new(s).unwrap()
    }

    #[tokio::test]
    async fn when_present_copies_full_payload_then_deletes() {
        let mut seq = Sequence::new();
        let mut store = MockDocumentStore::new();
        store
            .expect_get()
            .withf(|_, id| id == "milk")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(Some(data(json!({"quantity": 2, "brand": "Acme"})))));
        store
            .expect_set()
            .withf(|_, id, payload| {
                id == "oat milk" && *payload == data(json!({"quantity": 2, "brand": "Acme"}))
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(()));
        store
            .expect_delete()
            .withf(|_, id| id == "milk")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let result = use_case(store)
            .execute(&name("milk"), &name("oat milk"))
            .await
            .unwrap();

        assert_eq!(result, InventoryChange::Renamed);
    }

    #[tokio::test]
    async fn when_absent_touches_nothing() {
        let mut store = MockDocumentStore::new();
        store.expect_get().returning(|_, _| Ok(None));
        store.expect_set().never();
        store.expect_delete().never();

        let result = use_case(store)
            .execute(&name("milk"), &name("oat milk"))
            .await
            .unwrap();

        assert_eq!(result, InventoryChange::Unchanged);
    }

    #[tokio::test]
    async fn when_names_equal_is_noop() {
        let store = MockDocumentStore::new();

        let result = use_case(store)
            .execute(&name("milk"), &name("milk"))
            .await
            .unwrap();

        assert_eq!(result, InventoryChange::Unchanged);
    }

    #[tokio::test]
    async fn when_names_differ_only_by_case_renames() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get()
            .returning(|_, _| Ok(Some(data(json!({"quantity": 1})))));
        store
            .expect_set()
            .withf(|_, id, _| id == "Milk")
            .times(1)
            .returning(|_, _, _| Ok(()));
        store
            .expect_delete()
            .withf(|_, id| id == "milk")
            .times(1)
            .returning(|_, _| Ok(()));

        let result = use_case(store)
            .execute(&name("milk"), &name("Milk"))
            .await
            .unwrap();

        assert_eq!(result, InventoryChange::Renamed);
    }

    #[tokio::test]
    async fn when_copy_fails_old_is_not_deleted() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get()
            .returning(|_, _| Ok(Some(data(json!({"quantity": 2})))));
        store
            .expect_set()
            .returning(|_, _, _| Err(StoreError::unavailable("set", "connection reset")));
        store.expect_delete().never();

        let result = use_case(store)
            .execute(&name("milk"), &name("oat milk"))
            .await;

        assert!(matches!(result, Err(InventoryError::Store(_))));
    }

    #[tokio::test]
    async fn when_delete_fails_error_propagates_after_copy() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get()
            .returning(|_, _| Ok(Some(data(json!({"quantity": 2})))));
        store.expect_set().times(1).returning(|_, _, _| Ok(()));
        store
            .expect_delete()
            .times(1)
            .returning(|_, _| Err(StoreError::database("delete", "quota exceeded")));

        let result = use_case(store)
            .execute(&name("milk"), &name("oat milk"))
            .await;

        assert!(matches!(result, Err(InventoryError::Store(StoreError::Database { .. }))));
    }
}
