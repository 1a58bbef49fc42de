//! Name search over an inventory snapshot.

use crate::entities::InventoryItem;

/// Items whose name contains `query`, ignoring case.
///
/// Pure and order-preserving. An empty query keeps everything.
pub fn filter_by_name(items: &[InventoryItem], query: &str) -> Vec<InventoryItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.as_str().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
