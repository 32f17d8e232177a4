//! CSV output for analytics reports
//!
//! One writer per report kind. Every report starts with a header row; money
//! amounts and percentages are printed with two decimal places, dates as
//! `YYYY-MM-DD` and timestamps as `YYYY-MM-DD HH:MM:SS`.

use crate::types::{
    AnalyticsError, BalancePoint, CategorySlice, DailyBucket, DashboardSummary, DayTotal,
    MonthlyBucket, RecurringExpense,
};
use csv::Writer;
use rust_decimal::Decimal;
use std::io::Write;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

/// Write CSV rows with a header and flush
fn write_rows<I>(header: &[&str], rows: I, output: &mut dyn Write) -> Result<(), AnalyticsError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = Writer::from_writer(output);
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the dashboard summary as a single data row
///
/// An account without expenses has empty `top_category` and zero
/// `top_category_amount`.
pub fn write_summary_csv(
    summary: &DashboardSummary,
    output: &mut dyn Write,
) -> Result<(), AnalyticsError> {
    let (top_category, top_amount) = match &summary.biggest_expense_category {
        Some(biggest) => (biggest.category.clone(), biggest.amount),
        None => (String::new(), Decimal::ZERO),
    };

    write_rows(
        &[
            "account",
            "income",
            "expense",
            "net_balance",
            "savings_rate",
            "top_category",
            "top_category_amount",
            "transactions",
        ],
        [vec![
            summary.account_id.clone(),
            money(summary.totals.income),
            money(summary.totals.expense),
            money(summary.net_balance),
            money(summary.savings_rate),
            top_category,
            money(top_amount),
            summary.transaction_count.to_string(),
        ]],
        output,
    )
}

pub fn write_recurring_csv(
    recurring: &[RecurringExpense],
    output: &mut dyn Write,
) -> Result<(), AnalyticsError> {
    write_rows(
        &["name", "amount", "frequency", "total", "occurrences"],
        recurring.iter().map(|expense| {
            vec![
                expense.name.clone(),
                money(expense.amount),
                expense.frequency.as_str().to_string(),
                money(expense.total),
                expense.occurrences.to_string(),
            ]
        }),
        output,
    )
}

pub fn write_balance_csv(
    points: &[BalancePoint],
    output: &mut dyn Write,
) -> Result<(), AnalyticsError> {
    write_rows(
        &["date", "balance"],
        points.iter().map(|point| {
            vec![
                point.date.format(TIMESTAMP_FORMAT).to_string(),
                money(point.balance),
            ]
        }),
        output,
    )
}

pub fn write_top_days_csv(days: &[DayTotal], output: &mut dyn Write) -> Result<(), AnalyticsError> {
    write_rows(
        &["date", "amount"],
        days.iter()
            .map(|day| vec![day.date.format(DATE_FORMAT).to_string(), money(day.amount)]),
        output,
    )
}

pub fn write_daily_csv(
    buckets: &[DailyBucket],
    output: &mut dyn Write,
) -> Result<(), AnalyticsError> {
    write_rows(
        &["label", "date", "income", "expense", "net"],
        buckets.iter().map(|bucket| {
            vec![
                bucket.label.to_string(),
                bucket.date.format(DATE_FORMAT).to_string(),
                money(bucket.income),
                money(bucket.expense),
                money(bucket.net),
            ]
        }),
        output,
    )
}

pub fn write_monthly_csv(
    buckets: &[MonthlyBucket],
    output: &mut dyn Write,
) -> Result<(), AnalyticsError> {
    write_rows(
        &["label", "income", "expense"],
        buckets.iter().map(|bucket| {
            vec![
                bucket.label.to_string(),
                money(bucket.income),
                money(bucket.expense),
            ]
        }),
        output,
    )
}

pub fn write_categories_csv(
    slices: &[CategorySlice],
    output: &mut dyn Write,
) -> Result<(), AnalyticsError> {
    write_rows(
        &["name", "value", "color"],
        slices.iter().map(|slice| {
            vec![
                slice.name.clone(),
                money(slice.value),
                slice.color.to_string(),
            ]
        }),
        output,
    )
}
