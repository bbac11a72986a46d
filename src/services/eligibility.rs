//! Eligibility filter
//!
//! Keeps only the transactions of items with enough repeat sales inside the
//! lookback window. Validity is per item and retroactive: once an item
//! qualifies, all of its transactions are kept, including ones older than the
//! window.

use chrono::{DateTime, Months, Utc};
use std::collections::HashMap;

use crate::config::TamiConfig;
use crate::models::{ItemId, Transaction};

#[derive(Debug, Default)]
struct ItemEligibility {
    sales_in_lookback: usize,
    /// Tracked for reporting only, it does not take part in the validity rule
    has_recent_sale: bool,
    is_valid: bool,
}

/// Start of a window reaching `months` calendar months back from `now`
fn window_start(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Return the transactions of every item that qualifies as of `now`.
///
/// `transactions` must already be in chronological order. Relative order is
/// preserved in the output.
pub fn filter_valid_transactions(
    transactions: &[Transaction],
    now: DateTime<Utc>,
    config: &TamiConfig,
) -> Vec<Transaction> {
    let lookback_start = window_start(now, config.lookback_months);
    let recent_start = window_start(now, config.recent_months);

    let mut inclusion_map: HashMap<&ItemId, ItemEligibility> = HashMap::new();

    for transaction in transactions {
        let item = inclusion_map.entry(&transaction.item_id).or_default();

        if item.is_valid {
            continue;
        }

        // Older sales never count toward eligibility
        if transaction.timestamp <= lookback_start {
            continue;
        }
        item.sales_in_lookback += 1;

        // An item can only become valid on a recent sale
        if transaction.timestamp <= recent_start {
            continue;
        }
        item.has_recent_sale = true;

        if item.sales_in_lookback >= config.min_sales {
            item.is_valid = true;
        }
    }

    for (item_id, item) in &inclusion_map {
        tracing::trace!(
            item_id = %item_id,
            sales_in_lookback = item.sales_in_lookback,
            has_recent_sale = item.has_recent_sale,
            is_valid = item.is_valid,
            "Item eligibility"
        );
    }

    let valid: Vec<Transaction> = transactions
        .iter()
        .filter(|t| {
            inclusion_map
                .get(&t.item_id)
                .map(|item| item.is_valid)
                .unwrap_or(false)
        })
        .cloned()
        .collect();

    let valid_items = inclusion_map.values().filter(|item| item.is_valid).count();
    tracing::debug!(
        "Eligibility: {} of {} items valid, kept {} of {} transactions (as of {})",
        valid_items,
        inclusion_map.len(),
        valid.len(),
        transactions.len(),
        now
    );

    valid
}
