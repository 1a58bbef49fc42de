//! Inventory view state
//!
//! Everything the inventory screen keeps locally: the last listing, the
//! search box, the add form and modal, per-row quantity inputs and the
//! rename dialog. Rendering reads from here and never from the engine.

use std::collections::BTreeMap;

use pantry_domain::{filter_by_name, InventoryItem};
use serde::{Deserialize, Serialize};

/// Default value for every quantity input.
pub const DEFAULT_QUANTITY: i64 = 1;

/// The "add item" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddForm {
    pub name: String,
    pub quantity: i64,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: DEFAULT_QUANTITY,
        }
    }
}

/// Quantity inputs next to a single row's add and remove buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowQuantities {
    pub add: i64,
    pub remove: i64,
}

impl Default for RowQuantities {
    fn default() -> Self {
        Self {
            add: DEFAULT_QUANTITY,
            remove: DEFAULT_QUANTITY,
        }
    }
}

/// An open rename dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditState {
    pub original_name: String,
    pub new_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryViewState {
    /// Latest `list` result, in the order the engine returned it
    pub items: Vec<InventoryItem>,
    pub search_query: String,
    pub add_form: AddForm,
    pub add_modal_open: bool,
    /// Keyed by item name. Rows without an entry use the defaults.
    pub row_quantities: BTreeMap<String, RowQuantities>,
    pub edit: Option<EditState>,
    /// Message from the last failed operation
    pub last_error: Option<String>,
}

impl InventoryViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items matching the search box, in snapshot order.
    pub fn visible_items(&self) -> Vec<InventoryItem> {
        filter_by_name(&self.items, &self.search_query)
    }

    /// Replace the whole snapshot. Row inputs for names that disappeared are
    /// dropped.
    pub fn replace_snapshot(&mut self, items: Vec<InventoryItem>) {
        self.row_quantities
            .retain(|name, _| items.iter().any(|item| item.name.as_str() == name));
        self.items = items;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn open_add_modal(&mut self) {
        self.add_modal_open = true;
    }

    pub fn close_add_modal(&mut self) {
        self.add_modal_open = false;
    }

    pub fn reset_add_form(&mut self) {
        self.add_form = AddForm::default();
    }

    pub fn row_quantities(&self, name: &str) -> RowQuantities {
        self.row_quantities.get(name).copied().unwrap_or_default()
    }

    pub fn set_row_add_quantity(&mut self, name: &str, quantity: i64) {
        self.row_quantities.entry(name.to_string()).or_default().add = quantity;
    }

    pub fn set_row_remove_quantity(&mut self, name: &str, quantity: i64) {
        self.row_quantities.entry(name.to_string()).or_default().remove = quantity;
    }

    /// Open the rename dialog, pre-filled with the current name.
    pub fn start_edit(&mut self, name: &str) {
        self.edit = Some(EditState {
            original_name: name.to_string(),
            new_name: name.to_string(),
        });
    }

    pub fn set_edit_name(&mut self, new_name: impl Into<String>) {
        if let Some(edit) = self.edit.as_mut() {
            edit.new_name = new_name.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}
