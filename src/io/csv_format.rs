//! CSV format handling for ledger records
//!
//! This module is the validation boundary in front of the analytics engine:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain transactions
//! - Timestamp parsing into the reporting timezone
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{AnalyticsError, ReportZone, Transaction, TransactionType};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Naive timestamp layouts accepted in the `date` column, tried in order
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns:
/// id, account, type, amount, category, reason, date.
/// `account`, `category` and `reason` may be absent or empty.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub id: String,
    #[serde(default)]
    pub account: String,
    #[serde(rename = "type")]
    pub tx_type: String,
    pub amount: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub reason: String,
    pub date: String,
}

/// Parse a timestamp into the reporting timezone
///
/// Accepted forms:
/// - `YYYY-MM-DD` (midnight)
/// - `YYYY-MM-DD HH:MM:SS[.fff]` and `YYYY-MM-DDTHH:MM:SS[.fff]`, taken as already local
/// - RFC 3339 with an offset, converted into `zone`
///
/// # Returns
///
/// * `Some(NaiveDateTime)` in reporting-local time
/// * `None` if the value matches none of the forms
pub fn parse_timestamp(value: &str, zone: ReportZone) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(zone.localize(with_offset));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Convert a CsvRecord to a Transaction
///
/// This function:
/// - Parses the transaction type, case-insensitively; anything other than
///   `income` or `expense` is rejected
/// - Parses the amount into a Decimal and rejects negative values
/// - Parses the date into the reporting timezone
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
/// * `zone` - Reporting timezone
///
/// # Returns
///
/// * `Ok(Transaction)` - Successfully converted record
/// * `Err(AnalyticsError)` - Validation failure describing the bad field
pub fn convert_csv_record(
    csv_record: CsvRecord,
    zone: ReportZone,
) -> Result<Transaction, AnalyticsError> {
    let kind = match csv_record.tx_type.trim().to_lowercase().as_str() {
        "income" => TransactionType::Income,
        "expense" => TransactionType::Expense,
        _ => {
            return Err(AnalyticsError::invalid_transaction_type(
                &csv_record.tx_type,
                &csv_record.id,
            ))
        }
    };

    let amount = Decimal::from_str(csv_record.amount.trim())
        .ok()
        .filter(|amount| !amount.is_sign_negative())
        .ok_or_else(|| AnalyticsError::invalid_amount(&csv_record.amount, &csv_record.id))?;

    let date = parse_timestamp(&csv_record.date, zone)
        .ok_or_else(|| AnalyticsError::invalid_date(&csv_record.date, &csv_record.id))?;

    Ok(Transaction {
        id: csv_record.id,
        account_id: csv_record.account.trim().to_string(),
        kind,
        amount,
        category: csv_record.category.trim().to_string(),
        reason: csv_record.reason.trim().to_string(),
        date,
    })
}
