//! Running balance trace
//!
//! Walks the ledger in chronological order and records the account balance
//! after every transaction.

use crate::types::{BalancePoint, Transaction};
use rust_decimal::Decimal;

/// Cumulative balance after each transaction, in date order
///
/// Transactions are sorted by date on a copy of the slice; the sort is stable,
/// so entries sharing a timestamp keep their original relative order. The
/// output has exactly one point per input transaction.
pub fn running_balance(
    initial_balance: Decimal,
    transactions: &[Transaction],
) -> Vec<BalancePoint> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|transaction| transaction.date);

    let mut balance = initial_balance;
    ordered
        .into_iter()
        .map(|transaction| {
            balance = balance.saturating_add(transaction.signed_amount());
            BalancePoint {
                date: transaction.date,
                balance,
            }
        })
        .collect()
}
