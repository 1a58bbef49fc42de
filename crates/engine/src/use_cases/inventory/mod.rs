//! Inventory use cases.
//!
//! The mutation protocol over the `inventory` collection: list, upsert,
//! decrement-or-delete, rename and delete. Each mutation is a plain sequence
//! of store calls with no locking or version check, and none of them
//! refreshes a listing afterwards; re-listing is up to the caller.

use std::sync::Arc;

use crate::repositories::Inventory;

mod decrement_or_delete;
mod delete_item;
mod error;
mod list_items;
mod rename_item;
mod upsert_quantity;

pub use decrement_or_delete::DecrementOrDelete;
pub use delete_item::DeleteItem;
pub use error::InventoryError;
pub use list_items::ListItems;
pub use pantry_domain::{filter_by_name, InventoryChange};
pub use rename_item::RenameItem;
pub use upsert_quantity::UpsertQuantity;

/// Container for inventory use cases.
pub struct InventoryUseCases {
    pub list: Arc<ListItems>,
    pub upsert: Arc<UpsertQuantity>,
    pub decrement: Arc<DecrementOrDelete>,
    pub rename: Arc<RenameItem>,
    pub delete: Arc<DeleteItem>,
}

impl InventoryUseCases {
    pub fn new(inventory: Arc<Inventory>) -> Self {
        Self {
            list: Arc::new(ListItems::new(inventory.clone())),
            upsert: Arc::new(UpsertQuantity::new(inventory.clone())),
            decrement: Arc::new(DecrementOrDelete::new(inventory.clone())),
            rename: Arc::new(RenameItem::new(inventory.clone())),
            delete: Arc::new(DeleteItem::new(inventory)),
        }
    }
}
