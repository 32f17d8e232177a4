use crate::strategy::{BatchConfig, ReportRequest};
use crate::types::{parse_utc_offset, ReportConfig, ReportZone, TransactionType};
use chrono::{Datelike, FixedOffset, NaiveDate, Weekday};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Compute ledger analytics from a transaction CSV
#[derive(Parser, Debug)]
#[command(name = "ledger-analytics")]
#[command(about = "Compute ledger analytics from a transaction CSV", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing transaction records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Report to write to stdout
    #[arg(long = "report", value_name = "REPORT", default_value = "summary")]
    pub report: ReportKind,

    /// Loading strategy to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Loading strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Account to analyse (every row when omitted)
    #[arg(long = "account", value_name = "ID")]
    pub account: Option<String>,

    /// Balance of the account before its first transaction
    #[arg(
        long = "initial-balance",
        value_name = "AMOUNT",
        default_value = "0",
        allow_hyphen_values = true
    )]
    pub initial_balance: Decimal,

    /// Transaction type ranked by the top-days report
    #[arg(long = "type", value_name = "TYPE", default_value = "expense")]
    pub top_type: TypeArg,

    /// Number of days in the top-days report
    #[arg(long = "limit", value_name = "N", default_value_t = crate::core::DEFAULT_TOP_DAYS_LIMIT)]
    pub limit: usize,

    /// Day inside the week covered by the daily report (default: today)
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Year covered by the monthly report (default: current year)
    #[arg(long = "year", value_name = "YEAR", allow_hyphen_values = true)]
    pub year: Option<i32>,

    /// First day of the week for the daily report
    #[arg(long = "week-start", value_name = "DAY", default_value = "sunday")]
    pub week_start: WeekStart,

    /// Reporting timezone offset such as +02:00 (default: host local timezone)
    #[arg(
        long = "utc-offset",
        value_name = "OFFSET",
        allow_hyphen_values = true,
        value_parser = parse_utc_offset
    )]
    pub utc_offset: Option<FixedOffset>,

    /// Number of transactions per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of transactions per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Number of runtime worker threads (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Number of runtime worker threads (default: CPU cores)"
    )]
    pub worker_threads: Option<usize>,
}

/// Available loading strategies
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Reports the CLI can write
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    Summary,
    Recurring,
    Balance,
    TopDays,
    Daily,
    Monthly,
    Categories,
}

/// Transaction type accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    Income,
    Expense,
}

impl From<TypeArg> for TransactionType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Income => TransactionType::Income,
            TypeArg::Expense => TransactionType::Expense,
        }
    }
}

/// Week start accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WeekStart {
    Sunday,
    Monday,
}

impl From<WeekStart> for Weekday {
    fn from(arg: WeekStart) -> Self {
        match arg {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Uses the provided values if any, falling back to defaults.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.worker_threads.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.worker_threads.unwrap_or(default.worker_threads),
            )
        } else {
            BatchConfig::default()
        }
    }

    /// Resolve the reporting timezone and week start
    ///
    /// Without `--utc-offset` the host's local timezone is used, resolved per
    /// timestamp so daylight saving changes land on the right day.
    pub fn to_report_config(&self) -> ReportConfig {
        let zone = match self.utc_offset {
            Some(offset) => ReportZone::Fixed(offset),
            None => ReportZone::Local,
        };

        ReportConfig::new(zone, self.week_start.into())
    }

    /// Build the report request, filling date defaults from `today`
    ///
    /// `today` is passed in so the only clock read happens in `main`.
    pub fn to_report_request(&self, today: NaiveDate) -> ReportRequest {
        ReportRequest {
            kind: self.report,
            account: self.account.clone(),
            initial_balance: self.initial_balance,
            top_type: self.top_type.into(),
            limit: self.limit,
            reference_date: self.date.unwrap_or(today),
            year: self.year.unwrap_or_else(|| today.year()),
            config: self.to_report_config(),
        }
    }
}
