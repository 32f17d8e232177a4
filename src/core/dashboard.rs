//! Dashboard facade
//!
//! Fetches one account's snapshot from a [`LedgerSource`] and exposes every
//! analytic over it. The snapshot is taken once in [`Dashboard::load`]; the
//! engine functions underneath never see the source.

use crate::core::traits::LedgerSource;
use crate::core::{balance, recurring, series, top_days, totals};
use crate::types::{
    Account, AnalyticsError, BalancePoint, CategorySlice, DailyBucket, DashboardSummary,
    DayTotal, MonthlyBucket, RecurringExpense, Totals, Transaction, TransactionType,
};
use chrono::{NaiveDate, Weekday};

/// Snapshot of one account plus its transactions
#[derive(Debug, Clone)]
pub struct Dashboard {
    account: Account,
    transactions: Vec<Transaction>,
}

impl Dashboard {
    /// Build a dashboard from an already materialized snapshot
    ///
    /// The caller is responsible for passing only the account's transactions.
    pub fn new(account: Account, transactions: Vec<Transaction>) -> Self {
        Dashboard {
            account,
            transactions,
        }
    }

    /// Fetch an account and its transactions from a ledger source
    ///
    /// # Errors
    ///
    /// Propagates lookup errors from the source (e.g. unknown account).
    pub fn load<S: LedgerSource + ?Sized>(
        source: &S,
        account_id: &str,
    ) -> Result<Self, AnalyticsError> {
        let account = source.account(account_id)?;
        let transactions = source.transactions(account_id)?;

        tracing::debug!(
            account = %account.id,
            transactions = transactions.len(),
            "loaded ledger snapshot"
        );

        Ok(Self::new(account, transactions))
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn totals(&self) -> Totals {
        totals::compute_totals(&self.transactions)
    }

    /// Headline figures: totals, net balance, savings rate, biggest category
    pub fn summary(&self) -> DashboardSummary {
        let sums = self.totals();

        DashboardSummary {
            account_id: self.account.id.clone(),
            totals: sums,
            net_balance: sums.net_balance(self.account.initial_balance),
            savings_rate: totals::savings_rate(sums.income, sums.expense),
            biggest_expense_category: totals::biggest_expense_category(&self.transactions),
            transaction_count: self.transactions.len(),
        }
    }

    pub fn recurring(&self) -> Vec<RecurringExpense> {
        recurring::detect_recurring(&self.transactions)
    }

    pub fn running_balance(&self) -> Vec<BalancePoint> {
        balance::running_balance(self.account.initial_balance, &self.transactions)
    }

    pub fn top_days(&self, kind: TransactionType, limit: usize) -> Vec<DayTotal> {
        top_days::top_days(&self.transactions, kind, limit)
    }

    pub fn daily_series(&self, reference: NaiveDate, week_start: Weekday) -> [DailyBucket; 7] {
        series::daily_series(&self.transactions, reference, week_start)
    }

    pub fn monthly_series(&self, year: i32) -> [MonthlyBucket; 12] {
        series::monthly_series(&self.transactions, year)
    }

    pub fn category_breakdown(&self) -> Vec<CategorySlice> {
        series::category_breakdown(&self.transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::InMemoryLedger;
    use crate::core::test_support::{expense, income};
    use crate::types::{CategoryTotal, Frequency};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn rent_ledger(initial_balance: Decimal) -> InMemoryLedger {
        let mut ledger = InMemoryLedger::new();
        ledger.add_account(Account::new("checking", initial_balance));
        ledger.extend(vec![
            income(dec!(1000), "Salary", "", "2024-01-01 09:00:00"),
            expense(dec!(200), "Housing", "rent", "2024-01-05 10:00:00"),
            expense(dec!(200), "Housing", "rent", "2024-02-05 10:00:00"),
        ]);
        ledger
    }

    #[test]
    fn test_summary_rent_example() {
        let dashboard = Dashboard::load(&rent_ledger(Decimal::ZERO), "checking").unwrap();
        let summary = dashboard.summary();

        assert_eq!(summary.totals.income, dec!(1000));
        assert_eq!(summary.totals.expense, dec!(400));
        assert_eq!(summary.net_balance, dec!(600));
        assert_eq!(summary.savings_rate, dec!(60));
        assert_eq!(
            summary.biggest_expense_category,
            Some(CategoryTotal {
                category: "Housing".to_string(),
                amount: dec!(400)
            })
        );
        assert_eq!(summary.transaction_count, 3);

        let recurring = dashboard.recurring();
        assert_eq!(recurring.len(), 1);
        assert_eq!(recurring[0].frequency, Frequency::Monthly);

        let trace = dashboard.running_balance();
        assert_eq!(trace.last().map(|p| p.balance), Some(summary.net_balance));
    }

    #[test]
    fn test_empty_account_summary() {
        let dashboard = Dashboard::new(Account::new("empty", dec!(500)), Vec::new());
        let summary = dashboard.summary();

        assert_eq!(summary.totals, Totals::default());
        assert_eq!(summary.net_balance, dec!(500));
        assert_eq!(summary.savings_rate, Decimal::ZERO);
        assert_eq!(summary.biggest_expense_category, None);
        assert!(dashboard.recurring().is_empty());
        assert!(dashboard.running_balance().is_empty());
        assert!(dashboard.top_days(TransactionType::Expense, 5).is_empty());
        assert!(dashboard.category_breakdown().is_empty());
        assert_eq!(dashboard.monthly_series(2024).len(), 12);
    }

    #[test]
    fn test_load_unknown_account() {
        let result = Dashboard::load(&rent_ledger(Decimal::ZERO), "savings");
        assert!(matches!(result, Err(AnalyticsError::AccountNotFound { .. })));
    }

    #[test]
    fn test_summary_is_idempotent() {
        let dashboard = Dashboard::load(&rent_ledger(dec!(25)), "checking").unwrap();
        assert_eq!(dashboard.summary(), dashboard.summary());
        assert_eq!(dashboard.running_balance(), dashboard.running_balance());
        assert_eq!(dashboard.recurring(), dashboard.recurring());
    }
}
