//! Application layer for the player.

mod inventory_controller;

pub use inventory_controller::InventoryController;
