//! Outbound ports - what the player needs from the outside world.

mod inventory_api_port;

pub use inventory_api_port::{ClientError, InventoryApiPort};

#[cfg(test)]
pub use inventory_api_port::MockInventoryApiPort;
