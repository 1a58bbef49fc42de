//! Inventory operation errors.

use crate::infrastructure::ports::StoreError;
use pantry_domain::DomainError;

/// Errors that can occur during inventory operations.
///
/// A missing item is never an error here: decrement, rename and delete of an
/// absent name are no-ops.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Malformed inventory document '{name}': {reason}")]
    MalformedDocument { name: String, reason: String },
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl InventoryError {
    pub fn malformed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller's input rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
