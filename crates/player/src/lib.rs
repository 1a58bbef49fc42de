//! Pantry Player crate.
//!
//! Client side of the pantry tracker: the view state the UI renders from,
//! the port to the engine's HTTP API with its reqwest adapter, and the
//! controller that drives mutations and re-lists afterwards.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod state;

pub use application::InventoryController;
pub use infrastructure::http_client::EngineApiClient;
pub use ports::outbound::{ClientError, InventoryApiPort};
pub use state::InventoryViewState;
