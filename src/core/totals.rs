//! Aggregate totals, savings rate and biggest expense category
//!
//! These are the headline numbers of the dashboard. All three are single-pass
//! reductions over the transaction slice and never fail. Sums saturate at the
//! bounds of `Decimal` instead of overflowing.

use crate::core::grouping::OrderedGroups;
use crate::types::{CategoryTotal, Totals, Transaction, TransactionType};
use rust_decimal::Decimal;

/// Sum income and expense amounts separately
///
/// An empty slice yields zero for both.
pub fn compute_totals(transactions: &[Transaction]) -> Totals {
    transactions.iter().fold(Totals::default(), |mut totals, transaction| {
        match transaction.kind {
            TransactionType::Income => {
                totals.income = totals.income.saturating_add(transaction.amount)
            }
            TransactionType::Expense => {
                totals.expense = totals.expense.saturating_add(transaction.amount)
            }
        }
        totals
    })
}

/// Percentage of income that was not spent
///
/// Returns zero when there is no income, whatever the expenses. The result is
/// negative when expenses exceed income. A ratio too large for `Decimal`
/// saturates towards the sign of `income - expense`.
///
/// # Examples
///
/// ```
/// use ledger_analytics::core::savings_rate;
/// use rust_decimal::Decimal;
///
/// let rate = savings_rate(Decimal::from(1000), Decimal::from(400));
/// assert_eq!(rate, Decimal::from(60));
/// ```
pub fn savings_rate(income: Decimal, expense: Decimal) -> Decimal {
    if income.is_zero() {
        return Decimal::ZERO;
    }

    let saved = income.saturating_sub(expense);
    let ratio = saved.checked_div(income).unwrap_or_else(|| {
        if saved.is_sign_negative() == income.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    });
    ratio.saturating_mul(Decimal::ONE_HUNDRED)
}

/// Category with the largest summed expense amount
///
/// Ties keep whichever category appeared first in `transactions`.
///
/// # Returns
///
/// * `Some(CategoryTotal)` with the winning category and its sum
/// * `None` if there are no expense transactions
pub fn biggest_expense_category(transactions: &[Transaction]) -> Option<CategoryTotal> {
    let mut sums: OrderedGroups<&str, Decimal> = OrderedGroups::new();
    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let sum = sums.entry(transaction.category_label());
        *sum = sum.saturating_add(transaction.amount);
    }

    let mut biggest: Option<(&str, Decimal)> = None;
    for (category, amount) in sums {
        match biggest {
            // Strictly larger only, so the first of equal sums stays
            Some((_, best)) if amount <= best => {}
            _ => biggest = Some((category, amount)),
        }
    }

    biggest.map(|(category, amount)| CategoryTotal {
        category: category.to_string(),
        amount,
    })
}
