//! Inventory item - a named count stored as one document

use serde::{Deserialize, Serialize};

use crate::ItemName;

/// A pantry entry as listed to the view.
///
/// The name doubles as the document id; there is no other identifier.
/// `quantity` is whatever the store holds. The mutation protocol never writes
/// a value below 1, but documents written by other clients are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: ItemName,
    pub quantity: i64,
}

impl InventoryItem {
    pub fn new(name: ItemName, quantity: i64) -> Self {
        Self { name, quantity }
    }
}
