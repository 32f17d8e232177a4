//! Core business logic module
//!
//! This module contains the analytics engine and the thin layer that feeds it:
//! - `totals` - Income/expense totals, savings rate, biggest expense category
//! - `recurring` - Recurring expense detection
//! - `balance` - Running balance trace
//! - `top_days` - Highest-volume calendar days
//! - `series` - Daily and monthly trend buckets, category breakdown
//! - `grouping` - Insertion-ordered grouping shared by the above
//! - `traits` - Ledger source abstraction
//! - `ledger` - In-memory ledger source
//! - `dashboard` - Fetch-then-compute facade over one account

pub mod balance;
pub mod dashboard;
pub mod grouping;
pub mod ledger;
pub mod recurring;
pub mod series;
pub mod top_days;
pub mod totals;
pub mod traits;

pub use balance::running_balance;
pub use dashboard::Dashboard;
pub use ledger::InMemoryLedger;
pub use recurring::{classify_frequency, detect_recurring};
pub use series::{category_breakdown, daily_series, monthly_series, CATEGORY_PALETTE};
pub use top_days::{top_days, DEFAULT_TOP_DAYS_LIMIT};
pub use totals::{biggest_expense_category, compute_totals, savings_rate};
pub use traits::LedgerSource;
