use crate::models::Transaction;

/// Sort transactions in chronological order.
///
/// Transactions with equal timestamps keep their input order.
pub fn sort_transactions(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by_key(|t| t.timestamp);
    sorted
}
