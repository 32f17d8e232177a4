//! Transaction-related types for the ledger analytics engine
//!
//! This module defines the transaction direction enum and the read-only
//! transaction record that every analytics function consumes.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Account identifier
pub type AccountId = String;

/// Transaction identifier
///
/// Opaque to the engine; only used to trace records back to storage.
pub type TransactionId = String;

/// Label used for transactions without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Direction of a transaction
///
/// The sign of a transaction lives here, never in the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Money coming into the account
    Income,

    /// Money leaving the account
    Expense,
}

impl TransactionType {
    /// Lowercase name as it appears in CSV input and output
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

/// A single ledger entry
///
/// Owned by external storage and handed to the engine as an immutable
/// snapshot. The engine never mutates these.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Unique transaction identifier
    pub id: TransactionId,

    /// Owning account. The caller filters by account before invoking the engine.
    pub account_id: AccountId,

    /// Income or expense
    pub kind: TransactionType,

    /// Non-negative monetary amount
    pub amount: Decimal,

    /// Free-form category label. Empty means uncategorized.
    pub category: String,

    /// Free-form description
    ///
    /// Used as the grouping key for recurrence detection when present.
    pub reason: String,

    /// Timestamp in the reporting timezone
    pub date: NaiveDateTime,
}

impl Transaction {
    /// Category label used for grouping, substituting [`UNCATEGORIZED`] for blanks
    pub fn category_label(&self) -> &str {
        let category = self.category.trim();
        if category.is_empty() {
            UNCATEGORIZED
        } else {
            category
        }
    }

    /// Grouping key for recurrence detection: the reason if non-empty, else the category
    pub fn recurrence_key(&self) -> &str {
        let reason = self.reason.trim();
        if reason.is_empty() {
            self.category_label()
        } else {
            reason
        }
    }

    /// Whether this transaction is income
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Whether this transaction is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with the direction applied (positive for income, negative for expense)
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}
