//! Processing strategy module
//!
//! This module defines the Strategy pattern for the complete report pipeline:
//! loading the ledger from CSV, selecting one account, running the analytics
//! and writing the requested report. Strategies differ only in how they load
//! (synchronous streaming or asynchronous batches); everything after loading
//! is shared.

use crate::cli::{ReportKind, StrategyType};
use crate::core::{Dashboard, InMemoryLedger};
use crate::io::report_format;
use crate::types::{Account, AnalyticsError, ReportConfig, ReportZone, Transaction, TransactionType};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Account label used when the whole file is analysed as one ledger
pub const ALL_ACCOUNTS: &str = "all";

/// Everything needed to produce one report
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Which report to write
    pub kind: ReportKind,

    /// Account to analyse; `None` treats every row as one ledger
    pub account: Option<String>,

    /// Starting balance of the analysed account
    pub initial_balance: Decimal,

    /// Transaction type ranked by the top-days report
    pub top_type: TransactionType,

    /// Number of days in the top-days report
    pub limit: usize,

    /// Any day within the week covered by the daily report
    pub reference_date: NaiveDate,

    /// Year covered by the monthly report
    pub year: i32,

    /// Reporting timezone and week start
    pub config: ReportConfig,
}

impl ReportRequest {
    /// Build the dashboard snapshot this request asks about
    ///
    /// Duplicate transaction IDs are dropped (first occurrence wins) before
    /// the account filter is applied. An account exists only if at least one
    /// row of the file belongs to it.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the requested account has no rows.
    pub fn dashboard(&self, transactions: Vec<Transaction>) -> Result<Dashboard, AnalyticsError> {
        let mut ledger = InMemoryLedger::new();

        if let Some(account_id) = &self.account {
            if transactions.iter().any(|t| &t.account_id == account_id) {
                ledger.add_account(Account::new(account_id.as_str(), self.initial_balance));
            }
        }
        ledger.extend(transactions);

        match &self.account {
            Some(account_id) => Dashboard::load(&ledger, account_id),
            None => Ok(Dashboard::new(
                Account::new(ALL_ACCOUNTS, self.initial_balance),
                ledger.into_transactions(),
            )),
        }
    }
}

/// Compute the requested report over a dashboard and write it as CSV
pub fn write_report(
    dashboard: &Dashboard,
    request: &ReportRequest,
    output: &mut dyn Write,
) -> Result<(), AnalyticsError> {
    match request.kind {
        ReportKind::Summary => report_format::write_summary_csv(&dashboard.summary(), output),
        ReportKind::Recurring => report_format::write_recurring_csv(&dashboard.recurring(), output),
        ReportKind::Balance => {
            report_format::write_balance_csv(&dashboard.running_balance(), output)
        }
        ReportKind::TopDays => report_format::write_top_days_csv(
            &dashboard.top_days(request.top_type, request.limit),
            output,
        ),
        ReportKind::Daily => report_format::write_daily_csv(
            &dashboard.daily_series(request.reference_date, request.config.week_start),
            output,
        ),
        ReportKind::Monthly => {
            report_format::write_monthly_csv(&dashboard.monthly_series(request.year), output)
        }
        ReportKind::Categories => {
            report_format::write_categories_csv(&dashboard.category_breakdown(), output)
        }
    }
}

/// Processing strategy trait for complete report pipelines
///
/// Implementations decide how transactions are read from the input file. The
/// provided `process` method runs the rest of the pipeline.
pub trait ProcessingStrategy: Send + Sync {
    /// Load and validate every transaction in the input file
    ///
    /// Invalid records are logged and skipped. Only fatal errors (missing
    /// file, unreadable header, runtime failures) are returned.
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the input CSV file
    /// * `zone` - Reporting timezone
    fn load(&self, input_path: &Path, zone: ReportZone) -> Result<Vec<Transaction>, AnalyticsError>;

    /// Load the ledger, run the requested analytics and write the report
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails fatally or the output cannot be written.
    fn process(
        &self,
        input_path: &Path,
        request: &ReportRequest,
        output: &mut dyn Write,
    ) -> Result<(), AnalyticsError> {
        let transactions = self.load(input_path, request.config.zone)?;
        let dashboard = request.dashboard(transactions)?;

        tracing::info!(
            account = %dashboard.account().id,
            transactions = dashboard.transactions().len(),
            report = ?request.kind,
            "writing report"
        );

        write_report(&dashboard, request, output)
    }
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional configuration for async batch reading (ignored for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
