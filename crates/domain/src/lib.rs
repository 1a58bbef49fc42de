//! Pantry domain: item names, inventory items, quantity rules and search.

pub mod entities;
pub mod error;
pub mod events;
pub mod search;
pub mod value_objects;

pub use entities::InventoryItem;
pub use error::DomainError;
pub use events::InventoryChange;
pub use search::filter_by_name;
pub use value_objects::{validate_delta, ItemName, QuantityChange};
