//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account records provided by the ledger source
//! - `transaction`: Transaction records and identifiers
//! - `report`: Values produced by the analytics engine
//! - `config`: Reporting timezone and week-start settings
//! - `error`: Error types for ingestion and lookups

pub mod account;
pub mod config;
pub mod error;
pub mod report;
pub mod transaction;

pub use account::Account;
pub use config::{parse_utc_offset, ReportConfig, ReportZone};
pub use error::AnalyticsError;
pub use report::{
    BalancePoint, CategorySlice, CategoryTotal, DailyBucket, DashboardSummary, DayTotal,
    Frequency, MonthlyBucket, RecurringExpense, Totals,
};
pub use transaction::{AccountId, Transaction, TransactionId, TransactionType, UNCATEGORIZED};
