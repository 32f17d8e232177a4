//! Recurring expense detection
//!
//! Expenses are grouped by their recurrence key (reason, falling back to the
//! category). Any key seen more than once is reported as recurring, with its
//! frequency estimated from the occurrence count alone.

use crate::core::grouping::OrderedGroups;
use crate::types::{Frequency, RecurringExpense, Transaction};
use rust_decimal::Decimal;

/// Occurrence counts above this are classified as weekly
const WEEKLY_THRESHOLD: usize = 4;

/// Occurrence counts above this (and up to the weekly threshold) are monthly
const MONTHLY_THRESHOLD: usize = 1;

#[derive(Debug, Default)]
struct Occurrences {
    count: usize,
    total: Decimal,
}

/// Classify how often an expense recurs from the number of times it occurred
///
/// `Occasional` is only returned for counts of one or less, which
/// [`detect_recurring`] never passes in.
pub fn classify_frequency(count: usize) -> Frequency {
    if count > WEEKLY_THRESHOLD {
        Frequency::Weekly
    } else if count > MONTHLY_THRESHOLD {
        Frequency::Monthly
    } else {
        Frequency::Occasional
    }
}

/// Find expenses whose grouping key appears in more than one transaction
///
/// # Returns
///
/// One [`RecurringExpense`] per qualifying key, in order of each key's first
/// occurrence in `transactions`. The `amount` is the average per occurrence
/// and `total` the summed amount.
pub fn detect_recurring(transactions: &[Transaction]) -> Vec<RecurringExpense> {
    let mut groups: OrderedGroups<&str, Occurrences> = OrderedGroups::new();
    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let group = groups.entry(transaction.recurrence_key());
        group.count += 1;
        group.total = group.total.saturating_add(transaction.amount);
    }

    groups
        .into_iter()
        .filter(|(_, group)| group.count > 1)
        .map(|(name, group)| RecurringExpense {
            name: name.to_string(),
            amount: group.total / Decimal::from(group.count),
            frequency: classify_frequency(group.count),
            total: group.total,
            occurrences: group.count,
        })
        .collect()
}
