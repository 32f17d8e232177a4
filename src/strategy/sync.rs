//! Synchronous processing strategy
//!
//! Loads the ledger with a single-threaded streaming `SyncReader`. Each record
//! is validated as it is read; invalid records are logged and skipped.

use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::{AnalyticsError, ReportZone, Transaction};
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use ledger_analytics::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use ledger_analytics::types::ReportZone;
/// use std::path::Path;
///
/// let strategy = SyncProcessingStrategy;
/// let transactions = strategy
///     .load(Path::new("transactions.csv"), ReportZone::utc())
///     .expect("Loading failed");
/// println!("Loaded {} transactions", transactions.len());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn load(
        &self,
        input_path: &Path,
        zone: ReportZone,
    ) -> Result<Vec<Transaction>, AnalyticsError> {
        let reader = SyncReader::open(input_path, zone)?;

        let mut transactions = Vec::new();
        let mut skipped = 0usize;
        for result in reader {
            match result {
                Ok(transaction) => transactions.push(transaction),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(error = %e, "skipping invalid record");
                }
            }
        }

        tracing::info!(
            loaded = transactions.len(),
            skipped,
            path = %input_path.display(),
            "ledger loaded"
        );

        Ok(transactions)
    }
}
