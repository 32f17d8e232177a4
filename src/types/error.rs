//! Error types for the ledger analytics engine
//!
//! The analytics functions themselves never fail. Everything in this module
//! belongs to the boundary around them: reading CSV input, validating records
//! before they reach the engine, and looking up accounts in a ledger source.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed CSV, invalid data types, etc.
//! - **Validation Errors**: Unknown transaction types, negative amounts, bad dates
//! - **Lookup Errors**: Unknown accounts

use thiserror::Error;

/// Main error type for ledger ingestion and lookups
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable: the malformed record is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Transaction type other than `income` or `expense`
    ///
    /// Unknown types are rejected instead of being counted as expenses.
    #[error("Invalid transaction type '{tx_type}' for transaction {tx}")]
    InvalidTransactionType {
        /// The invalid transaction type string
        tx_type: String,
        /// Transaction ID
        tx: String,
    },

    /// Amount that is malformed or negative
    #[error("Invalid amount '{amount}' for transaction {tx}")]
    InvalidAmount {
        /// The invalid amount string
        amount: String,
        /// Transaction ID
        tx: String,
    },

    /// Timestamp that cannot be parsed into a calendar date and time
    #[error("Invalid date '{date}' for transaction {tx}")]
    InvalidDate {
        /// The unparseable date string
        date: String,
        /// Transaction ID
        tx: String,
    },

    /// Configuration value that cannot be used
    #[error("Invalid {setting}: {message}")]
    InvalidConfig {
        /// Name of the setting
        setting: String,
        /// What is wrong with it
        message: String,
    },

    /// Account is not known to the ledger source
    #[error("Account {account} not found")]
    AccountNotFound {
        /// Account ID that was requested
        account: String,
    },
}

// Conversion from io::Error to AnalyticsError
impl From<std::io::Error> for AnalyticsError {
    fn from(error: std::io::Error) -> Self {
        AnalyticsError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to AnalyticsError
impl From<csv::Error> for AnalyticsError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        AnalyticsError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl AnalyticsError {
    /// Create an InvalidTransactionType error
    pub fn invalid_transaction_type(tx_type: &str, tx: &str) -> Self {
        AnalyticsError::InvalidTransactionType {
            tx_type: tx_type.to_string(),
            tx: tx.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, tx: &str) -> Self {
        AnalyticsError::InvalidAmount {
            amount: amount.to_string(),
            tx: tx.to_string(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(date: &str, tx: &str) -> Self {
        AnalyticsError::InvalidDate {
            date: date.to_string(),
            tx: tx.to_string(),
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(setting: &str, message: impl Into<String>) -> Self {
        AnalyticsError::InvalidConfig {
            setting: setting.to_string(),
            message: message.into(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: &str) -> Self {
        AnalyticsError::AccountNotFound {
            account: account.to_string(),
        }
    }
}
