//! Benchmark suite for the analytics engine
//!
//! Measures each engine function over generated ledgers of increasing size
//! using the divan benchmarking framework, plus the full sync and async
//! pipelines over a generated CSV file.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! Generated ledgers mix monthly salary, rent, weekly groceries and one-off
//! purchases spread over several years, so grouping and bucketing see
//! realistic key counts.

use chrono::{Duration, NaiveDate, Weekday};
use clap::Parser;
use ledger_analytics::cli::{CliArgs, StrategyType};
use ledger_analytics::core::{
    category_breakdown, compute_totals, daily_series, detect_recurring, monthly_series,
    running_balance, top_days,
};
use ledger_analytics::strategy::{create_strategy, BatchConfig};
use ledger_analytics::types::{Transaction, TransactionType};
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;

fn main() {
    divan::main();
}

const SIZES: &[usize] = &[100, 1_000, 100_000];

const CATEGORIES: [&str; 6] = ["Housing", "Food", "Transport", "Shopping", "Health", "Fun"];

/// Build a deterministic ledger with `count` transactions
fn generate_ledger(count: usize) -> Vec<Transaction> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .expect("valid start date");

    (0..count)
        .map(|i| {
            let (kind, category, reason) = match i % 10 {
                0 => (TransactionType::Income, "Salary", "Paycheck".to_string()),
                1 => (TransactionType::Expense, "Housing", "Rent".to_string()),
                2 | 3 => (TransactionType::Expense, "Food", "Groceries".to_string()),
                _ => (
                    TransactionType::Expense,
                    CATEGORIES[i % CATEGORIES.len()],
                    format!("purchase-{}", i % 97),
                ),
            };

            Transaction {
                id: format!("t{}", i),
                account_id: "checking".to_string(),
                kind,
                amount: Decimal::new((i as i64 % 5_000) + 100, 2),
                category: category.to_string(),
                reason,
                date: start + Duration::hours((i as i64 * 7) % (24 * 365 * 4)),
            }
        })
        .collect()
}

#[divan::bench(args = SIZES)]
fn totals(bencher: divan::Bencher, size: usize) {
    let ledger = generate_ledger(size);
    bencher.bench(|| compute_totals(divan::black_box(&ledger)));
}

#[divan::bench(args = SIZES)]
fn recurring(bencher: divan::Bencher, size: usize) {
    let ledger = generate_ledger(size);
    bencher.bench(|| detect_recurring(divan::black_box(&ledger)));
}

#[divan::bench(args = SIZES)]
fn balance(bencher: divan::Bencher, size: usize) {
    let ledger = generate_ledger(size);
    bencher.bench(|| running_balance(Decimal::ZERO, divan::black_box(&ledger)));
}

#[divan::bench(args = SIZES)]
fn top_expense_days(bencher: divan::Bencher, size: usize) {
    let ledger = generate_ledger(size);
    bencher.bench(|| top_days(divan::black_box(&ledger), TransactionType::Expense, 5));
}

#[divan::bench(args = SIZES)]
fn daily(bencher: divan::Bencher, size: usize) {
    let ledger = generate_ledger(size);
    let reference = NaiveDate::from_ymd_opt(2021, 6, 15).expect("valid reference date");
    bencher.bench(|| daily_series(divan::black_box(&ledger), reference, Weekday::Sun));
}

#[divan::bench(args = SIZES)]
fn monthly(bencher: divan::Bencher, size: usize) {
    let ledger = generate_ledger(size);
    bencher.bench(|| monthly_series(divan::black_box(&ledger), 2021));
}

#[divan::bench(args = SIZES)]
fn categories(bencher: divan::Bencher, size: usize) {
    let ledger = generate_ledger(size);
    bencher.bench(|| category_breakdown(divan::black_box(&ledger)));
}

/// Write a generated ledger to a temporary CSV file
fn ledger_csv(count: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "id,account,type,amount,category,reason,date").expect("write header");
    for transaction in generate_ledger(count) {
        writeln!(
            file,
            "{},{},{},{},{},{},{}",
            transaction.id,
            transaction.account_id,
            transaction.kind.as_str(),
            transaction.amount,
            transaction.category,
            transaction.reason,
            transaction.date.format("%Y-%m-%d %H:%M:%S"),
        )
        .expect("write record");
    }
    file.flush().expect("Failed to flush temp file");
    file
}

fn run_pipeline(bencher: divan::Bencher, strategy_type: StrategyType, config: Option<BatchConfig>) {
    let file = ledger_csv(10_000);
    let args = CliArgs::try_parse_from([
        "ledger-analytics",
        "--account",
        "checking",
        "--utc-offset",
        "Z",
        "input.csv",
    ])
    .expect("valid arguments");
    let request = args.to_report_request(NaiveDate::from_ymd_opt(2021, 6, 15).expect("valid date"));
    let strategy = create_strategy(strategy_type, config);

    bencher.bench(|| {
        let mut output = Vec::new();
        strategy
            .process(file.path(), &request, &mut output)
            .expect("Processing failed");
        output
    });
}

/// Full pipeline with the synchronous loader (10,000 transactions)
#[divan::bench]
fn sync_pipeline(bencher: divan::Bencher) {
    run_pipeline(bencher, StrategyType::Sync, None);
}

/// Full pipeline with the asynchronous loader (10,000 transactions)
#[divan::bench]
fn async_pipeline(bencher: divan::Bencher) {
    run_pipeline(bencher, StrategyType::Async, Some(BatchConfig::default()));
}
