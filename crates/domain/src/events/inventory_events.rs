//! Inventory mutation outcomes.

use serde::{Deserialize, Serialize};

/// What a mutation did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum InventoryChange {
    /// A new document was written with this quantity
    Created { quantity: i64 },
    /// An existing document was overwritten with this quantity
    Updated { quantity: i64 },
    /// The document was deleted
    Deleted,
    /// The payload now lives under the new name and the old document is gone
    Renamed,
    /// Nothing was written (absent item, or rename onto itself)
    Unchanged,
}
