//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::DocumentStore;
use crate::repositories::Inventory;
use crate::use_cases::InventoryUseCases;

/// Main application state.
///
/// Holds the store and use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub store: Arc<dyn DocumentStore>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub inventory: InventoryUseCases,
}

impl App {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let inventory = Arc::new(Inventory::new(store.clone()));

        Self {
            store,
            use_cases: UseCases {
                inventory: InventoryUseCases::new(inventory),
            },
        }
    }
}
