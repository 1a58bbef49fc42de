//! Inventory Controller - drives the inventory screen
//!
//! Every mutation is followed by a fresh `list`, including mutations that
//! turned out to be no-ops and mutations that failed. The snapshot in
//! [`InventoryViewState`] is always replaced whole, never patched locally.

use std::sync::Arc;

use pantry_domain::{InventoryChange, ItemName};

use crate::ports::outbound::{ClientError, InventoryApiPort};
use crate::state::InventoryViewState;

pub struct InventoryController {
    api: Arc<dyn InventoryApiPort>,
    state: InventoryViewState,
}

impl InventoryController {
    pub fn new(api: Arc<dyn InventoryApiPort>) -> Self {
        Self::with_state(api, InventoryViewState::new())
    }

    /// Resume from a previously saved view state.
    pub fn with_state(api: Arc<dyn InventoryApiPort>, state: InventoryViewState) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &InventoryViewState {
        &self.state
    }

    /// Direct access for form bindings (search box, inputs, modal toggles).
    pub fn state_mut(&mut self) -> &mut InventoryViewState {
        &mut self.state
    }

    /// Fetch the collection and replace the snapshot.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.api.list().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Refreshed inventory");
                self.state.replace_snapshot(items);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to refresh inventory");
                self.state.record_error(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn add_item(
        &mut self,
        name: &str,
        quantity: i64,
    ) -> Result<InventoryChange, ClientError> {
        let result = match ItemName::new(name) {
            Ok(name) => self.api.add(&name, quantity).await,
            Err(e) => Err(e.into()),
        };
        self.finish("add", result).await
    }

    pub async fn remove_item(
        &mut self,
        name: &str,
        quantity: i64,
    ) -> Result<InventoryChange, ClientError> {
        let result = match ItemName::existing(name) {
            Ok(name) => self.api.remove(&name, quantity).await,
            Err(e) => Err(e.into()),
        };
        self.finish("remove", result).await
    }

    pub async fn rename_item(
        &mut self,
        old_name: &str,
        new_name: &str,
    ) -> Result<InventoryChange, ClientError> {
        let result = match (ItemName::existing(old_name), ItemName::new(new_name)) {
            (Ok(old_name), Ok(new_name)) => self.api.rename(&old_name, &new_name).await,
            (Err(e), _) | (_, Err(e)) => Err(e.into()),
        };
        self.finish("rename", result).await
    }

    pub async fn delete_item(&mut self, name: &str) -> Result<InventoryChange, ClientError> {
        let result = match ItemName::existing(name) {
            Ok(name) => self.api.delete(&name).await,
            Err(e) => Err(e.into()),
        };
        self.finish("delete", result).await
    }

    /// Row "+" button, using that row's add quantity.
    pub async fn add_row(&mut self, name: &str) -> Result<InventoryChange, ClientError> {
        let quantity = self.state.row_quantities(name).add;
        self.add_item(name, quantity).await
    }

    /// Row "-" button, using that row's remove quantity.
    pub async fn remove_row(&mut self, name: &str) -> Result<InventoryChange, ClientError> {
        let quantity = self.state.row_quantities(name).remove;
        self.remove_item(name, quantity).await
    }

    /// Submit the add form. On success the form resets and the modal closes;
    /// on failure both stay as they are so the user can correct the input.
    pub async fn confirm_add(&mut self) -> Result<InventoryChange, ClientError> {
        let form = self.state.add_form.clone();
        let change = self.add_item(&form.name, form.quantity).await?;
        self.state.reset_add_form();
        self.state.close_add_modal();
        Ok(change)
    }

    /// Submit the rename dialog. Without an open dialog nothing is sent.
    pub async fn confirm_rename(&mut self) -> Result<InventoryChange, ClientError> {
        let Some(edit) = self.state.edit.clone() else {
            return Ok(InventoryChange::Unchanged);
        };
        let change = self.rename_item(&edit.original_name, &edit.new_name).await?;
        self.state.cancel_edit();
        Ok(change)
    }

    async fn finish(
        &mut self,
        operation: &'static str,
        result: Result<InventoryChange, ClientError>,
    ) -> Result<InventoryChange, ClientError> {
        match &result {
            Ok(change) => {
                tracing::debug!(operation, change = ?change, "Inventory mutation applied");
                self.state.clear_error();
            }
            Err(e) => {
                tracing::warn!(operation, error = %e, "Inventory mutation failed");
                self.state.record_error(e.to_string());
            }
        }

        // Refresh errors are recorded in state.
        let _ = self.refresh().await;
        result
    }
}
