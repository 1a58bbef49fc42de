//! List items use case.

use std::sync::Arc;

use pantry_domain::{filter_by_name, InventoryItem};

use crate::repositories::Inventory;

use super::error::InventoryError;

/// Fetch the whole inventory snapshot.
pub struct ListItems {
    inventory: Arc<Inventory>,
}

impl ListItems {
    pub fn new(inventory: Arc<Inventory>) -> Self {
        Self { inventory }
    }

    /// Every item in store order. Read failures propagate.
    pub async fn execute(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        self.inventory.list().await
    }

    /// The snapshot narrowed by a case-insensitive name search.
    pub async fn search(&self, query: &str) -> Result<Vec<InventoryItem>, InventoryError> {
        let items = self.execute().await?;
        Ok(filter_by_name(&items, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{Document, MockDocumentStore, StoreError};
    use serde_json::json;

    fn doc(id: &str, quantity: i64) -> Document {
        Document::new(id, json!({ "quantity": quantity }).as_object().cloned().unwrap())
    }

    #[tokio::test]
    async fn when_store_lists_returns_items() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list_all()
            .returning(|_| Ok(vec![doc("Eggs", 12), doc("oat milk", 2)]));

        let use_case = ListItems::new(Arc::new(Inventory::new(Arc::new(store))));
        let items = use_case.execute().await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name.as_str(), "Eggs");
        assert_eq!(items[1].quantity, 2);
    }

    #[tokio::test]
    async fn search_filters_case_insensitively() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list_all()
            .returning(|_| Ok(vec![doc("Eggs", 12), doc("oat milk", 2), doc("Milk", 1)]));

        let use_case = ListItems::new(Arc::new(Inventory::new(Arc::new(store))));
        let items = use_case.search("mILK").await.unwrap();

        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["oat milk", "Milk"]);
    }

    #[tokio::test]
    async fn when_store_fails_error_propagates() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list_all()
            .returning(|_| Err(StoreError::unavailable("list_all", "connection refused")));

        let use_case = ListItems::new(Arc::new(Inventory::new(Arc::new(store))));
        let result = use_case.execute().await;

        assert!(matches!(result, Err(InventoryError::Store(_))));
    }
}
