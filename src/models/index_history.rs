use serde::{Deserialize, Serialize};

use super::transaction::{ItemId, Transaction};

/// Index value right after a transaction has been folded into the index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSnapshot {
    pub item_id: ItemId,
    pub price: f64,
    pub index_value: f64,
    pub transaction: Transaction,
}

impl IndexSnapshot {
    pub fn new(transaction: &Transaction, index_value: f64) -> Self {
        Self {
            item_id: transaction.item_id.clone(),
            price: transaction.price,
            index_value,
            transaction: transaction.clone(),
        }
    }

    /// False when the index went to infinity or NaN at this point
    pub fn is_finite(&self) -> bool {
        self.index_value.is_finite()
    }
}

/// Latest snapshot of an item together with its price-to-index ratio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioEntry {
    pub item_id: ItemId,
    pub price: f64,
    pub index_value: f64,
    pub transaction: Transaction,
    pub index_ratio: f64,
}

impl RatioEntry {
    pub fn from_snapshot(snapshot: IndexSnapshot) -> Self {
        let index_ratio = snapshot.price / snapshot.index_value;
        Self {
            item_id: snapshot.item_id,
            price: snapshot.price,
            index_value: snapshot.index_value,
            transaction: snapshot.transaction,
            index_ratio,
        }
    }

    /// Item price restated at the given (usually the latest) index value
    pub fn time_adjusted_value(&self, index_value: f64) -> f64 {
        self.index_ratio * index_value
    }
}
