//! Domain Events
//!
//! Return types from inventory mutations, communicating what happened when
//! the collection was modified.

pub mod inventory_events;

pub use inventory_events::InventoryChange;
