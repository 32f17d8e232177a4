//! Top days by income or expense

use crate::core::grouping::OrderedGroups;
use crate::types::{DayTotal, Transaction, TransactionType};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Number of days returned when the caller does not ask for a specific limit
pub const DEFAULT_TOP_DAYS_LIMIT: usize = 5;

/// Calendar days with the highest summed amount for one transaction type
///
/// Transactions are bucketed by calendar day (time of day is ignored), summed,
/// and sorted by amount, largest first. Days with equal sums keep the order in
/// which they were first seen.
pub fn top_days(
    transactions: &[Transaction],
    kind: TransactionType,
    limit: usize,
) -> Vec<DayTotal> {
    let mut days: OrderedGroups<NaiveDate, Decimal> = OrderedGroups::new();
    for transaction in transactions.iter().filter(|t| t.kind == kind) {
        let sum = days.entry(transaction.date.date());
        *sum = sum.saturating_add(transaction.amount);
    }

    let mut ranked: Vec<DayTotal> = days
        .into_iter()
        .map(|(date, amount)| DayTotal { date, amount })
        .collect();
    ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
    ranked.truncate(limit);
    ranked
}
