//! Asynchronous CSV reader with batch interface
//!
//! Provides batched reads of validated transactions from an async byte source.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - the csv_format module for validation and conversion
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of Transactions
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{ReportZone, Transaction};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
///
/// Invalid records are logged and skipped; the count is kept for reporting.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    zone: ReportZone,
    skipped: usize,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    ///
    /// # Arguments
    ///
    /// * `reader` - Async reader providing CSV data
    /// * `zone` - Reporting timezone
    pub fn new(reader: R, zone: ReportZone) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            zone,
            skipped: 0,
        }
    }

    /// Number of records skipped so far because they failed to parse or validate
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Read a batch of transactions
    ///
    /// Reads up to `batch_size` valid transactions. Invalid records are logged
    /// as warnings and do not count toward the batch size.
    ///
    /// # Returns
    ///
    /// The converted transactions in input order. An empty vector means the
    /// end of the input was reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<Transaction> {
        let mut batch = Vec::with_capacity(batch_size);
        let zone = self.zone;
        let mut skipped = 0;
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(csv_record)) => match convert_csv_record(csv_record, zone) {
                    Ok(transaction) => batch.push(transaction),
                    Err(e) => {
                        skipped += 1;
                        tracing::warn!(error = %e, "skipping invalid record");
                    }
                },
                Some(Err(e)) => {
                    skipped += 1;
                    tracing::warn!(error = %e, "skipping malformed CSV record");
                }
                None => break,
            }
        }

        drop(records);
        self.skipped += skipped;
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::io::Cursor;
    use rust_decimal_macros::dec;

    fn reader(csv_content: &'static str) -> AsyncReader<Cursor<&'static [u8]>> {
        AsyncReader::new(Cursor::new(csv_content.as_bytes()), ReportZone::utc())
    }

    #[tokio::test]
    async fn test_async_reader_read_batch() {
        let mut async_reader = reader(
            "id,account,type,amount,category,reason,date\n\
             t1,checking,income,100.0,Salary,,2024-01-01\n\
             t2,checking,expense,50.0,Food,,2024-01-02\n\
             t3,savings,income,200.0,Gift,,2024-01-03\n",
        );

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].id, "t1");
        assert_eq!(batch[1].id, "t2");
        assert_eq!(batch[1].amount, dec!(50.0));

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].account_id, "savings");

        assert!(async_reader.read_batch(2).await.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_empty_csv() {
        let mut async_reader = reader("id,account,type,amount,category,reason,date\n");
        assert!(async_reader.read_batch(10).await.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_skips_invalid_records() {
        let mut async_reader = reader(
            "id,account,type,amount,category,reason,date\n\
             t1,checking,transfer,1,,,2024-01-01\n\
             t2,checking,expense,-4,,,2024-01-01\n\
             t3,checking,expense,4,,,not-a-date\n\
             t4,checking,expense,4,,,2024-01-01\n",
        );

        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].id, "t4");
        assert_eq!(async_reader.skipped(), 3);
    }

    #[tokio::test]
    async fn test_async_reader_case_insensitive_type() {
        let mut async_reader = reader(
            "id,account,type,amount,category,reason,date\n\
             t1,checking,INCOME,1,,,2024-01-01\n\
             t2,checking,Expense,1,,,2024-01-01\n",
        );

        assert_eq!(async_reader.read_batch(10).await.len(), 2);
    }
}
