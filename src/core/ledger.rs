//! In-memory ledger source
//!
//! Holds account records and loaded transactions and answers the two lookups
//! the dashboard needs. It stands in for the relational store when the ledger
//! comes from a CSV file.
//!
//! # Duplicate Handling
//!
//! If a duplicate transaction ID is encountered, only the first occurrence is
//! stored. Subsequent transactions with the same ID are ignored.

use crate::core::traits::LedgerSource;
use crate::types::{Account, AccountId, AnalyticsError, Transaction, TransactionId};
use std::collections::{HashMap, HashSet};

/// Ledger held entirely in memory
///
/// Transactions keep their load order, which is the order the engine sees.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    /// Map of account ID to account record
    accounts: HashMap<AccountId, Account>,
    /// Every stored transaction, in insertion order
    transactions: Vec<Transaction>,
    /// IDs already stored, for first-occurrence-wins deduplication
    seen: HashSet<TransactionId>,
}

impl InMemoryLedger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account, replacing any previous record with the same ID
    pub fn add_account(&mut self, account: Account) {
        self.accounts.insert(account.id.clone(), account);
    }

    /// Store a transaction
    ///
    /// # Returns
    ///
    /// `true` if stored, `false` if a transaction with the same ID was already present
    pub fn store(&mut self, transaction: Transaction) -> bool {
        if !self.seen.insert(transaction.id.clone()) {
            tracing::warn!(tx = %transaction.id, "duplicate transaction id ignored");
            return false;
        }

        self.transactions.push(transaction);
        true
    }

    /// Store many transactions, returning how many were kept
    pub fn extend(&mut self, transactions: impl IntoIterator<Item = Transaction>) -> usize {
        let mut stored = 0;
        for transaction in transactions {
            if self.store(transaction) {
                stored += 1;
            }
        }
        stored
    }

    /// Consume the ledger, returning every stored transaction regardless of account
    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }

    /// Number of stored transactions across all accounts
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the ledger holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl LedgerSource for InMemoryLedger {
    fn account(&self, account_id: &str) -> Result<Account, AnalyticsError> {
        self.accounts
            .get(account_id)
            .cloned()
            .ok_or_else(|| AnalyticsError::account_not_found(account_id))
    }

    fn transactions(&self, account_id: &str) -> Result<Vec<Transaction>, AnalyticsError> {
        if !self.accounts.contains_key(account_id) {
            return Err(AnalyticsError::account_not_found(account_id));
        }

        Ok(self
            .transactions
            .iter()
            .filter(|transaction| transaction.account_id == account_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{expense, income};
    use rust_decimal_macros::dec;

    fn ledger_with_two_accounts() -> InMemoryLedger {
        let mut ledger = InMemoryLedger::new();
        ledger.add_account(Account::new("checking", dec!(100)));
        ledger.add_account(Account::new("savings", dec!(5000)));

        let mut deposit = income(dec!(50), "Interest", "", "2024-01-31 00:00:00");
        deposit.account_id = "savings".to_string();

        ledger.extend(vec![
            income(dec!(900), "Salary", "", "2024-01-01 09:00:00"),
            deposit,
            expense(dec!(40), "Food", "", "2024-01-02 12:00:00"),
        ]);
        ledger
    }

    #[test]
    fn test_account_lookup() {
        let ledger = ledger_with_two_accounts();
        let account = ledger.account("savings").unwrap();
        assert_eq!(account.initial_balance, dec!(5000));
    }

    #[test]
    fn test_transactions_filtered_by_account() {
        let ledger = ledger_with_two_accounts();

        let checking = ledger.transactions("checking").unwrap();
        assert_eq!(checking.len(), 2);
        assert!(checking.iter().all(|t| t.account_id == "checking"));

        let savings = ledger.transactions("savings").unwrap();
        assert_eq!(savings.len(), 1);
        assert_eq!(savings[0].amount, dec!(50));
    }

    #[test]
    fn test_unknown_account() {
        let ledger = ledger_with_two_accounts();
        assert_eq!(
            ledger.account("brokerage"),
            Err(AnalyticsError::account_not_found("brokerage"))
        );
        assert_eq!(
            ledger.transactions("brokerage"),
            Err(AnalyticsError::account_not_found("brokerage"))
        );
    }

    #[test]
    fn test_duplicate_transaction_first_wins() {
        let mut ledger = InMemoryLedger::new();
        ledger.add_account(Account::new("checking", dec!(0)));

        let original = income(dec!(10), "Gift", "", "2024-01-01 00:00:00");
        let mut duplicate = expense(dec!(99), "Food", "", "2024-01-02 00:00:00");
        duplicate.id = original.id.clone();

        assert!(ledger.store(original));
        assert!(!ledger.store(duplicate));
        assert_eq!(ledger.len(), 1);

        let stored = ledger.transactions("checking").unwrap();
        assert_eq!(stored[0].amount, dec!(10));
    }
}
