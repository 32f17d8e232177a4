//! Periodic trend series and category breakdown
//!
//! The daily series covers the seven days of one week, the monthly series the
//! twelve months of one year. Both always have every bucket, even when no
//! transaction falls into it, and both take their reference point as an
//! argument rather than reading the clock.

use crate::core::grouping::OrderedGroups;
use crate::types::{CategorySlice, DailyBucket, MonthlyBucket, Transaction, TransactionType};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;

/// Colors assigned to categories in first-seen order, wrapping around
pub const CATEGORY_PALETTE: [&str; 8] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8", "#82CA9D", "#A4DE6C", "#D0ED57",
];

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Three-letter weekday name
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Three-letter month name for a month number between 1 and 12
pub fn month_label(month: u32) -> &'static str {
    MONTH_LABELS
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// First day of the week containing `date`
pub fn week_start_date(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let days_into_week =
        (7 + date.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    date.checked_sub_days(Days::new(u64::from(days_into_week)))
        .unwrap_or(NaiveDate::MIN)
}

/// Income and expense sums for transactions whose calendar day is within `[first, last]`
///
/// Whole days are compared, so every instant of a day belongs to it whatever
/// the timestamp precision.
fn sum_between(
    transactions: &[Transaction],
    first: NaiveDate,
    last: NaiveDate,
) -> (Decimal, Decimal) {
    transactions
        .iter()
        .filter(|t| (first..=last).contains(&t.date.date()))
        .fold((Decimal::ZERO, Decimal::ZERO), |(income, expense), t| match t.kind {
            TransactionType::Income => (income.saturating_add(t.amount), expense),
            TransactionType::Expense => (income, expense.saturating_add(t.amount)),
        })
}

/// Per-day income, expense and net for the week containing `reference`
///
/// The week begins on `week_start`. Buckets are in day order.
pub fn daily_series(
    transactions: &[Transaction],
    reference: NaiveDate,
    week_start: Weekday,
) -> [DailyBucket; 7] {
    let first_day = week_start_date(reference, week_start);

    std::array::from_fn(|offset| {
        let date = first_day
            .checked_add_days(Days::new(offset as u64))
            .unwrap_or(NaiveDate::MAX);
        let (income, expense) = sum_between(transactions, date, date);

        DailyBucket {
            label: weekday_label(date.weekday()),
            date,
            income,
            expense,
            net: income.saturating_sub(expense),
        }
    })
}

/// First and last day of a month, or `None` if the year is out of range
fn month_span(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last = match next {
        Some(next) => next.pred_opt()?,
        // December of the last representable year
        None => NaiveDate::from_ymd_opt(year, 12, 31)?,
    };

    Some((first, last))
}

/// Per-month income and expense for January through December of `year`
///
/// A year chrono cannot represent yields twelve zeroed buckets.
pub fn monthly_series(transactions: &[Transaction], year: i32) -> [MonthlyBucket; 12] {
    std::array::from_fn(|index| {
        let month = index as u32 + 1;
        let (income, expense) = match month_span(year, month) {
            Some((first, last)) => sum_between(transactions, first, last),
            None => (Decimal::ZERO, Decimal::ZERO),
        };

        MonthlyBucket {
            label: month_label(month),
            month,
            income,
            expense,
        }
    })
}

/// Expense totals per category with a chart color each
///
/// One slice per distinct category, in first-seen order. Income is ignored.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySlice> {
    let mut categories: OrderedGroups<&str, Decimal> = OrderedGroups::new();
    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let value = categories.entry(transaction.category_label());
        *value = value.saturating_add(transaction.amount);
    }

    categories
        .into_iter()
        .enumerate()
        .map(|(index, (name, value))| CategorySlice {
            name: name.to_string(),
            value,
            color: CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()],
        })
        .collect()
}
