//! Ledger source abstraction
//!
//! The analytics engine never talks to storage. Whatever holds accounts and
//! transactions (a database, a CSV file, a test fixture) implements
//! `LedgerSource`, and the dashboard uses it to fetch one account's snapshot.

use crate::types::{Account, AnalyticsError, Transaction};

/// Trait for looking up accounts and their transactions
pub trait LedgerSource {
    /// Get the account record, including its initial balance
    fn account(&self, account_id: &str) -> Result<Account, AnalyticsError>;

    /// Get every transaction belonging to the account
    fn transactions(&self, account_id: &str) -> Result<Vec<Transaction>, AnalyticsError>;
}
