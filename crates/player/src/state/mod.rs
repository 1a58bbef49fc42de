//! View state for the inventory screen.

mod inventory_state;

pub use inventory_state::{AddForm, EditState, InventoryViewState, RowQuantities};
