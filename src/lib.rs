//! Ledger Analytics Library
//! # Overview
//!
//! This library computes personal-finance analytics over an account's
//! transaction history: totals and savings rate, recurring expense detection,
//! running balance, top spending days, daily and monthly trend series and a
//! category breakdown.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, Account, report values, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Analytics engine:
//!   - [`core::totals`] - Income/expense totals, savings rate, biggest category
//!   - [`core::recurring`] - Recurring expense detection and frequency tiers
//!   - [`core::balance`] - Running balance trace
//!   - [`core::top_days`] - Highest-volume days per transaction type
//!   - [`core::series`] - Daily, monthly and category chart series
//!   - [`core::dashboard`] - Fetch-then-compute facade over a ledger source
//! - [`io`] - CSV ingestion (sync and async readers) and report writers
//! - [`strategy`] - Complete report pipelines, one per loading strategy
//!
//! # Engine Contract
//!
//! Every engine function is pure: it takes a transaction list and returns
//! freshly built values. Nothing reads the system clock or the host locale;
//! the reference date, year, week start and reporting offset are always
//! passed in. Calling a function twice on the same input yields the same
//! result.
//!
//! # Transaction Types
//!
//! - **Income**: Money received, adds to the balance
//! - **Expense**: Money spent, subtracts from the balance
//!
//! Amounts are non-negative decimals; the type carries the sign.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{Dashboard, InMemoryLedger, LedgerSource};
pub use types::{
    Account, AnalyticsError, DashboardSummary, ReportConfig, Transaction, TransactionType,
};
