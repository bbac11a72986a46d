use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::index_history::{IndexSnapshot, RatioEntry};
use super::transaction::Transaction;

/// Every intermediate stage of a TAMI computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TamiReport {
    /// Reference instant the eligibility windows were measured from
    pub as_of: DateTime<Utc>,
    pub sorted_transactions: Vec<Transaction>,
    pub valid_transactions: Vec<Transaction>,
    pub index_value_history: Vec<IndexSnapshot>,
    pub index_value: f64,
    pub index_ratios: Vec<RatioEntry>,
    pub time_adjusted_values: Vec<f64>,
    pub time_adjusted_market_index: f64,
}

impl TamiReport {
    /// Number of distinct items that made it into the index
    pub fn item_count(&self) -> usize {
        self.index_ratios.len()
    }
}
