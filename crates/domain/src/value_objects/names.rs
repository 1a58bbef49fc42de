//! Validated item name
//!
//! An item's name is also its document id in the store, so the rules here are
//! the rules a hosted document store applies to ids:
//! - Non-empty and not whitespace-only
//! - At most 1500 bytes
//! - No `/`, not `.` or `..`, not of the form `__name__`
//!
//! Names are kept exactly as given. Identity is case-sensitive and
//! whitespace-sensitive.
//!
//! Those rules guard names being written for the first time. Documents that
//! already exist may have been written by other clients under looser rules,
//! so names that refer to them ([`ItemName::existing`], and every name read
//! back through serde) only have to be addressable: non-empty, no `/`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum size of a document id, in bytes
const MAX_NAME_BYTES: usize = 1500;

// ============================================================================
// ItemName
// ============================================================================

/// A validated item name, usable as a document id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Create a new validated item name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty or only whitespace
    /// - The name exceeds 1500 bytes
    /// - The name contains `/`, is `.` or `..`, or looks like `__reserved__`
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Item name cannot be empty"));
        }
        if name.len() > MAX_NAME_BYTES {
            return Err(DomainError::validation(format!(
                "Item name cannot exceed {} bytes",
                MAX_NAME_BYTES
            )));
        }
        if name.contains('/') {
            return Err(DomainError::validation("Item name cannot contain '/'"));
        }
        if name == "." || name == ".." {
            return Err(DomainError::validation(format!(
                "Item name cannot be '{}'",
                name
            )));
        }
        if name.len() > 4 && name.starts_with("__") && name.ends_with("__") {
            return Err(DomainError::validation(format!(
                "Item name '{}' is reserved",
                name
            )));
        }
        Ok(Self(name))
    }

    /// Name of a document that already exists in the store.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty or contains `/`,
    /// neither of which can address a document.
    pub fn existing(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("Item name cannot be empty"));
        }
        if name.contains('/') {
            return Err(DomainError::validation("Item name cannot contain '/'"));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ItemName {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for ItemName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::existing(raw).map_err(serde::de::Error::custom)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> String {
        name.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
