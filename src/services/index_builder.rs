//! Repeat-sales index construction
//!
//! The index is the average latest price across every item seen so far,
//! scaled by a divisor. Each time a new item enters the basket the divisor is
//! rebased so that the basket change alone does not move the index; only
//! repeat sales of tracked items do.

use std::collections::HashMap;

use crate::error::TamiError;
use crate::models::{IndexSnapshot, ItemId, Transaction};

/// Latest known price per item, iterated in first-seen order
#[derive(Debug, Default)]
struct LatestPrices<'a> {
    slots: HashMap<&'a ItemId, usize>,
    prices: Vec<f64>,
}

impl<'a> LatestPrices<'a> {
    /// Record a price, returning true if this is the item's first sale
    fn record(&mut self, item_id: &'a ItemId, price: f64) -> bool {
        match self.slots.get(item_id) {
            Some(&slot) => {
                self.prices[slot] = price;
                false
            }
            None => {
                self.slots.insert(item_id, self.prices.len());
                self.prices.push(price);
                true
            }
        }
    }

    fn item_count(&self) -> usize {
        self.prices.len()
    }

    fn total(&self) -> f64 {
        self.prices.iter().sum()
    }
}

/// Build the index value history, one snapshot per transaction.
///
/// `transactions` must be sorted and already filtered for eligibility.
/// Non-finite index values are kept in the history (see
/// [`IndexSnapshot::is_finite`]) and logged.
pub fn create_index_value_history(transactions: &[Transaction]) -> Vec<IndexSnapshot> {
    let mut latest_prices = LatestPrices::default();
    let mut last_index_value = 0.0_f64;
    let mut last_divisor = 1.0_f64;

    let mut history = Vec::with_capacity(transactions.len());

    for (i, transaction) in transactions.iter().enumerate() {
        let is_first_sale = latest_prices.record(&transaction.item_id, transaction.price);

        let item_count = latest_prices.item_count() as f64;
        let total = latest_prices.total();
        let index_value = total / (item_count * last_divisor);

        let weighted_index_value = if i == 0 {
            index_value
        } else {
            let next_divisor = if is_first_sale {
                last_divisor * (index_value / last_index_value)
            } else {
                last_divisor
            };
            last_divisor = next_divisor;
            total / (item_count * next_divisor)
        };
        last_index_value = weighted_index_value;

        if !weighted_index_value.is_finite() {
            tracing::warn!(
                item_id = %transaction.item_id,
                position = i,
                index_value = weighted_index_value,
                divisor = last_divisor,
                "Index value is not finite"
            );
        }

        history.push(IndexSnapshot::new(transaction, weighted_index_value));
    }

    tracing::debug!(
        "Built index history: {} snapshots over {} items, divisor {}",
        history.len(),
        latest_prices.item_count(),
        last_divisor
    );

    history
}

/// Current index value, i.e. the value after the last transaction
pub fn get_index_value(history: &[IndexSnapshot]) -> Result<f64, TamiError> {
    history
        .last()
        .map(|snapshot| snapshot.index_value)
        .ok_or(TamiError::NoEligibleTransactions)
}

/// First snapshot whose index value is infinite or NaN
pub fn first_non_finite(history: &[IndexSnapshot]) -> Option<TamiError> {
    history
        .iter()
        .position(|snapshot| !snapshot.is_finite())
        .map(|position| TamiError::NonFiniteIndexValue {
            item_id: history[position].item_id.clone(),
            position,
            value: history[position].index_value,
        })
}
