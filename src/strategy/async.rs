//! Asynchronous batch loading strategy
//!
//! Loads the ledger on a tokio multi-threaded runtime, reading the file in
//! batches through `AsyncReader`.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, worker_threads)
//!     └── AsyncReader (batch CSV reading + validation)
//! ```
//!
//! Batches are read one after another and appended in order, so the engine
//! sees transactions in file order exactly as with the sync strategy.

use crate::io::async_reader::AsyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::{AnalyticsError, ReportZone, Transaction};
use std::io::ErrorKind;
use std::path::Path;

/// Configuration for batch loading
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of transactions per batch
    pub batch_size: usize,
    /// Number of runtime worker threads; batches themselves are read in order
    pub worker_threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            worker_threads: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn new(batch_size: usize, worker_threads: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                batch_size,
                default = default.batch_size,
                "invalid batch size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let worker_threads = if worker_threads == 0 {
            tracing::warn!(
                worker_threads,
                default = default.worker_threads,
                "invalid worker count, using default"
            );
            default.worker_threads
        } else {
            worker_threads
        };

        Self {
            batch_size,
            worker_threads,
        }
    }
}

/// Asynchronous batch loading strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    /// Batch loading configuration
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy with the specified configuration
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn load(
        &self,
        input_path: &Path,
        zone: ReportZone,
    ) -> Result<Vec<Transaction>, AnalyticsError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.worker_threads)
            .build()?;

        runtime.block_on(async {
            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| match e.kind() {
                    ErrorKind::NotFound => AnalyticsError::FileNotFound {
                        path: input_path.display().to_string(),
                    },
                    _ => AnalyticsError::from(e),
                })?;

            // Wrap tokio file in a compatibility layer for csv-async
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file, zone);

            let mut transactions = Vec::new();
            let mut batches = 0usize;
            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }

                batches += 1;
                transactions.extend(batch);
            }

            tracing::info!(
                loaded = transactions.len(),
                skipped = reader.skipped(),
                batches,
                path = %input_path.display(),
                "ledger loaded"
            );

            Ok(transactions)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_async_strategy_loads_records() {
        let file = create_temp_csv(
            "id,account,type,amount,category,reason,date\n\
             t1,checking,income,100,,,2024-01-01\n\
             t2,checking,expense,30,,,2024-01-02\n",
        );

        let strategy = AsyncProcessingStrategy::new(BatchConfig::default());
        let transactions = strategy.load(file.path(), ReportZone::utc()).unwrap();
        assert_eq!(transactions.len(), 2);
    }

    #[test]
    fn test_async_strategy_handles_missing_file() {
        let strategy = AsyncProcessingStrategy::new(BatchConfig::default());
        let result = strategy.load(Path::new("nonexistent.csv"), ReportZone::utc());
        assert!(matches!(result, Err(AnalyticsError::FileNotFound { .. })));
    }

    #[test]
    fn test_async_strategy_preserves_order_across_batches() {
        let file = create_temp_csv(
            "id,account,type,amount,category,reason,date\n\
             t1,checking,income,1,,,2024-01-05\n\
             t2,checking,income,2,,,2024-01-04\n\
             t3,checking,bogus,3,,,2024-01-03\n\
             t4,checking,income,4,,,2024-01-02\n\
             t5,checking,income,5,,,2024-01-01\n",
        );

        // Small batches force several reads
        let strategy = AsyncProcessingStrategy::new(BatchConfig::new(2, 2));
        let transactions = strategy.load(file.path(), ReportZone::utc()).unwrap();

        let ids: Vec<_> = transactions.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t4", "t5"]);
    }

    #[test]
    fn test_batch_config_zero_values_fall_back() {
        let config = BatchConfig::new(0, 0);
        assert_eq!(config.batch_size, 1000);
        assert_eq!(config.worker_threads, num_cpus::get());
    }
}
