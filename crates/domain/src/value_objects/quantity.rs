//! Quantity arithmetic for pantry items

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Outcome of taking some amount away from a stored quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityChange {
    /// Quantity to write back
    Updated(i64),
    /// Nothing left (zero or below), the document must be deleted
    Depleted,
}

impl QuantityChange {
    /// Subtract `delta` from `current`.
    ///
    /// A result of zero or less is never written back, so `current <= delta`
    /// always yields `Depleted`.
    pub fn decrement(current: i64, delta: i64) -> Self {
        if current <= delta {
            Self::Depleted
        } else {
            Self::Updated(current - delta)
        }
    }

    /// Add `delta` to `current`, failing instead of wrapping.
    pub fn increment(current: i64, delta: i64) -> Result<i64, DomainError> {
        current.checked_add(delta).ok_or_else(|| {
            DomainError::validation(format!(
                "Quantity overflow: {} + {} does not fit in a 64-bit integer",
                current, delta
            ))
        })
    }
}

/// Validate an add/remove amount.
///
/// # Errors
///
/// Returns `DomainError::Validation` when `delta` is zero or negative.
pub fn validate_delta(delta: i64) -> Result<i64, DomainError> {
    if delta < 1 {
        return Err(DomainError::validation(format!(
            "Quantity change must be at least 1, got {}",
            delta
        )));
    }
    Ok(delta)
}
