//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over validated transactions from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<Transaction, AnalyticsError>` for each CSV row:
//!
//! ```no_run
//! use ledger_analytics::types::ReportZone;
//! use ledger_analytics::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::open(Path::new("transactions.csv"), ReportZone::utc()).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(transaction) => println!("Loaded transaction: {:?}", transaction),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, unreadable header) are returned from `open()`
//! - Individual record errors are yielded as Err variants carrying the line number
//! - The reader keeps going after a bad record

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{AnalyticsError, ReportZone, Transaction};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Synchronous CSV reader
///
/// Reads one record at a time, so memory use does not grow with file size.
#[derive(Debug)]
pub struct SyncReader<R = File> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    zone: ReportZone,
}

impl SyncReader<File> {
    /// Open a CSV file for streaming iteration
    ///
    /// # Errors
    ///
    /// * `FileNotFound` if nothing exists at `path`
    /// * `IoError` for other open failures
    /// * `ParseError` if the header row cannot be read
    pub fn open(path: &Path, zone: ReportZone) -> Result<Self, AnalyticsError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AnalyticsError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => AnalyticsError::from(e),
        })?;

        Self::new(file, zone)
    }
}

impl<R: Read> SyncReader<R> {
    /// Create a SyncReader over any byte source
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (for trailing optional columns)
    /// - Use an 8KB buffer for efficient I/O
    pub fn new(source: R, zone: ReportZone) -> Result<Self, AnalyticsError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            zone,
        })
    }
}

impl<R: Read> Iterator for SyncReader<R> {
    type Item = Result<Transaction, AnalyticsError>;

    /// Get the next transaction from the CSV input
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Transaction))` - Successfully parsed and validated record
    /// * `Some(Err(AnalyticsError))` - Parse or validation error with line number
    /// * `None` - End of input reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();

        match self.reader.read_record(&mut record) {
            Ok(false) => None,
            Ok(true) => {
                let line = record.position().map(|pos| pos.line());
                let result = record
                    .deserialize::<CsvRecord>(Some(&self.headers))
                    .map_err(AnalyticsError::from)
                    .and_then(|csv_record| convert_csv_record(csv_record, self.zone))
                    .map_err(|e| match e {
                        AnalyticsError::ParseError { message, .. } => {
                            AnalyticsError::ParseError { line, message }
                        }
                        other => AnalyticsError::ParseError {
                            line,
                            message: other.to_string(),
                        },
                    });
                Some(result)
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionType;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "id,account,type,amount,category,reason,date\n";

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn read_all(content: &str) -> Vec<Result<Transaction, AnalyticsError>> {
        SyncReader::new(content.as_bytes(), ReportZone::utc()).unwrap().collect()
    }

    #[test]
    fn test_sync_reader_opens_file() {
        let file = create_temp_csv(&format!(
            "{}t1,checking,income,100.0,Salary,,2024-01-01\n",
            HEADER
        ));

        let records: Vec<_> = SyncReader::open(file.path(), ReportZone::utc()).unwrap().collect();
        assert_eq!(records.len(), 1);

        let transaction = records[0].as_ref().unwrap();
        assert_eq!(transaction.kind, TransactionType::Income);
        assert_eq!(transaction.amount, dec!(100.0));
        assert_eq!(transaction.category, "Salary");
    }

    #[test]
    fn test_sync_reader_fails_on_missing_file() {
        let result = SyncReader::open(Path::new("nonexistent.csv"), ReportZone::utc());
        assert!(matches!(result, Err(AnalyticsError::FileNotFound { .. })));
    }

    #[test]
    fn test_sync_reader_includes_line_numbers_in_errors() {
        let records = read_all(&format!(
            "{}t1,checking,income,100.0,,,2024-01-01\n\
             t2,checking,expense,invalid,,,2024-01-02\n\
             t3,checking,expense,50.0,,,2024-01-03\n",
            HEADER
        ));

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(records[2].is_ok());

        let error = records[1].as_ref().unwrap_err();
        assert!(matches!(error, AnalyticsError::ParseError { line: Some(3), .. }));
        assert!(error.to_string().contains("Invalid amount"));
    }

    #[test]
    fn test_sync_reader_rejects_unknown_type_and_continues() {
        let records = read_all(&format!(
            "{}t1,checking,income,1,,,2024-01-01\n\
             t2,checking,refund,1,,,2024-01-01\n\
             t3,checking,expense,1,,,2024-01-01\n",
            HEADER
        ));

        let valid: Vec<_> = records.into_iter().filter_map(Result::ok).collect();
        assert_eq!(valid.len(), 2);
        assert_eq!(valid[0].id, "t1");
        assert_eq!(valid[1].id, "t3");
    }

    #[test]
    fn test_sync_reader_handles_whitespace() {
        let records = read_all(&format!(
            "{}  t1  , checking ,  expense  ,  12.5  ,  Food  ,  lunch  ,  2024-01-01 12:00:00  \n",
            HEADER
        ));

        let transaction = records[0].as_ref().unwrap();
        assert_eq!(transaction.id, "t1");
        assert_eq!(transaction.amount, dec!(12.5));
        assert_eq!(transaction.reason, "lunch");
    }

    #[test]
    fn test_sync_reader_optional_columns() {
        let records = read_all("id,type,amount,date\nt1,expense,3,2024-01-01\n");

        let transaction = records[0].as_ref().unwrap();
        assert_eq!(transaction.account_id, "");
        assert_eq!(transaction.category, "");
        assert_eq!(transaction.reason, "");
    }

    #[test]
    fn test_sync_reader_handles_empty_file_after_header() {
        assert!(read_all(HEADER).is_empty());
    }
}
