use std::collections::HashMap;

use crate::models::{IndexSnapshot, ItemId, RatioEntry};

/// Reduce the history to the last snapshot of each item and compute its
/// price-to-index ratio.
///
/// Entries come out in the order each item first appears in `history`.
pub fn get_index_ratios(history: &[IndexSnapshot]) -> Vec<RatioEntry> {
    let mut slots: HashMap<&ItemId, usize> = HashMap::new();
    let mut last_sales: Vec<&IndexSnapshot> = Vec::new();

    for snapshot in history {
        match slots.get(&snapshot.item_id) {
            Some(&slot) => last_sales[slot] = snapshot,
            None => {
                slots.insert(&snapshot.item_id, last_sales.len());
                last_sales.push(snapshot);
            }
        }
    }

    last_sales
        .into_iter()
        .map(|snapshot| RatioEntry::from_snapshot(snapshot.clone()))
        .collect()
}
