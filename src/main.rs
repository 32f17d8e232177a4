//! Ledger Analytics CLI
//!
//! Command-line interface for computing ledger analytics from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv > summary.csv
//! cargo run -- --report recurring --account checking transactions.csv
//! cargo run -- --report top-days --type income --limit 3 transactions.csv
//! cargo run -- --report daily --date 2024-03-13 --week-start monday transactions.csv
//! cargo run -- --report monthly --year 2024 --utc-offset +02:00 transactions.csv
//! cargo run -- --strategy async --batch-size 2000 --max-concurrent 8 transactions.csv
//! ```
//!
//! The program reads transaction records from the input CSV file, loads them
//! with the selected strategy, computes the requested report and writes it as
//! CSV to stdout. Diagnostics go to stderr; set `RUST_LOG` to change the
//! level (default `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, unknown account, etc.)
//! - 2: Invalid arguments, reported by clap (including a malformed `--utc-offset`)

use chrono::Local;
use ledger_analytics::cli;
use ledger_analytics::strategy;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let request = args.to_report_request(Local::now().date_naive());

    // Create the appropriate processing strategy based on CLI arguments
    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config)
    };

    // Output goes to stdout
    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &request, &mut output) {
        tracing::error!(error = %e, "report failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
