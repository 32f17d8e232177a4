//! Account-related types for the ledger analytics engine
//!
//! Accounts live in external storage. The engine only reads the starting
//! balance an account carried before its first recorded transaction.

use super::transaction::AccountId;
use rust_decimal::Decimal;

/// Account record provided by the ledger source
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The account identifier
    pub id: AccountId,

    /// Display name
    pub name: String,

    /// Balance before the first ledger entry
    ///
    /// Signed: an account can start overdrawn.
    pub initial_balance: Decimal,
}

impl Account {
    /// Create an account with the given starting balance, named after its id
    pub fn new(id: impl Into<AccountId>, initial_balance: Decimal) -> Self {
        let id = id.into();
        Account {
            name: id.clone(),
            id,
            initial_balance,
        }
    }
}
