//! Inventory collection access.
//!
//! Maps between `inventory` documents and domain items. Every item is one
//! document whose id is the item name and whose payload holds `quantity`.

use serde_json::{json, Value};
use std::sync::Arc;

use pantry_domain::{InventoryItem, ItemName};

use crate::infrastructure::ports::{DocumentData, DocumentStore, StoreError};
use crate::use_cases::inventory::InventoryError;

/// Collection holding one document per pantry item.
pub const INVENTORY_COLLECTION: &str = "inventory";

/// Field holding an item's count.
pub const QUANTITY_FIELD: &str = "quantity";

/// Inventory collection operations.
///
/// Each method is a single store round-trip; nothing here spans two calls.
pub struct Inventory {
    store: Arc<dyn DocumentStore>,
}

impl Inventory {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Every item, in the store's listing order.
    pub async fn list(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        let documents = self.store.list_all(INVENTORY_COLLECTION).await?;
        documents
            .into_iter()
            .map(|doc| {
                let name = ItemName::existing(doc.id.as_str()).map_err(|e| {
                    InventoryError::malformed(&doc.id, format!("document id is not addressable: {}", e))
                })?;
                let quantity = quantity_from_payload(&doc.id, &doc.data)?;
                Ok(InventoryItem::new(name, quantity))
            })
            .collect()
    }

    /// The full stored payload, if the item exists.
    pub async fn payload(&self, name: &ItemName) -> Result<Option<DocumentData>, StoreError> {
        self.store.get(INVENTORY_COLLECTION, name.as_str()).await
    }

    /// Current quantity, if the item exists.
    pub async fn quantity(&self, name: &ItemName) -> Result<Option<i64>, InventoryError> {
        match self.payload(name).await? {
            Some(data) => Ok(Some(quantity_from_payload(name.as_str(), &data)?)),
            None => Ok(None),
        }
    }

    /// Overwrite the document with `{quantity}`. Any other fields are dropped.
    pub async fn write_quantity(&self, name: &ItemName, quantity: i64) -> Result<(), StoreError> {
        self.store
            .set(INVENTORY_COLLECTION, name.as_str(), quantity_payload(quantity))
            .await
    }

    /// Overwrite the document with an arbitrary payload.
    pub async fn write_payload(&self, name: &ItemName, data: DocumentData) -> Result<(), StoreError> {
        self.store.set(INVENTORY_COLLECTION, name.as_str(), data).await
    }

    pub async fn delete(&self, name: &ItemName) -> Result<(), StoreError> {
        self.store.delete(INVENTORY_COLLECTION, name.as_str()).await
    }
}

/// Payload written by quantity updates.
pub fn quantity_payload(quantity: i64) -> DocumentData {
    let mut data = DocumentData::new();
    data.insert(QUANTITY_FIELD.to_string(), json!(quantity));
    data
}

/// Read `quantity` from a payload. Integral floats are accepted since some
/// clients only have one number type.
pub fn quantity_from_payload(id: &str, data: &DocumentData) -> Result<i64, InventoryError> {
    match data.get(QUANTITY_FIELD) {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    Ok(f as i64)
                }
                _ => Err(InventoryError::malformed(
                    id,
                    format!("quantity {} is not an integer", n),
                )),
            }
        }
        Some(other) => Err(InventoryError::malformed(
            id,
            format!("quantity {} is not a number", other),
        )),
        None => Err(InventoryError::malformed(id, "quantity is missing")),
    }
}
