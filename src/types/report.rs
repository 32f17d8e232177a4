//! Output types produced by the analytics engine
//!
//! Plain, freshly allocated values handed to presentation code. Nothing here
//! formats currency or localizes labels beyond the fixed day/month names.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// Income and expense sums over a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Sum of income amounts
    pub income: Decimal,

    /// Sum of expense amounts
    pub expense: Decimal,
}

impl Totals {
    /// Balance after applying these totals to a starting balance
    ///
    /// `initial_balance + income - expense`
    pub fn net_balance(&self, initial_balance: Decimal) -> Decimal {
        initial_balance
            .saturating_add(self.income)
            .saturating_sub(self.expense)
    }
}

/// Summed expense amount for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

/// How often a recurring expense shows up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Weekly,
    Monthly,
    Occasional,
}

impl Frequency {
    /// Display name used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Occasional => "Occasional",
        }
    }
}

/// An expense whose grouping key appears in more than one transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringExpense {
    /// Grouping key (reason, or category when the reason is blank)
    pub name: String,

    /// Average amount per occurrence
    pub amount: Decimal,

    /// Frequency classified from the occurrence count
    pub frequency: Frequency,

    /// Sum over all occurrences
    pub total: Decimal,

    /// Number of transactions in the group
    pub occurrences: usize,
}

/// Account balance right after one transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalancePoint {
    pub date: NaiveDateTime,
    pub balance: Decimal,
}

/// Summed amount for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// One day of a weekly trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyBucket {
    /// Three-letter weekday name
    pub label: &'static str,

    /// The calendar day this bucket covers
    pub date: NaiveDate,

    pub income: Decimal,
    pub expense: Decimal,

    /// `income - expense`
    pub net: Decimal,
}

/// One month of a yearly trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyBucket {
    /// Three-letter month name
    pub label: &'static str,

    /// Month number, 1 through 12
    pub month: u32,

    pub income: Decimal,
    pub expense: Decimal,
}

/// One slice of the expense-by-category chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySlice {
    pub name: String,
    pub value: Decimal,
    pub color: &'static str,
}

/// Headline figures for an account's dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub account_id: String,
    pub totals: Totals,
    pub net_balance: Decimal,

    /// Percentage of income kept; zero when there is no income
    pub savings_rate: Decimal,

    /// `None` when the account has no expenses
    pub biggest_expense_category: Option<CategoryTotal>,

    pub transaction_count: usize,
}
