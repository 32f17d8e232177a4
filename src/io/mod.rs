//! I/O module
//!
//! Handles CSV parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - Record conversion and validation at the ingestion boundary
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface
//! - `report_format` - CSV writers for each report kind

pub mod async_reader;
pub mod csv_format;
pub mod report_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{convert_csv_record, parse_timestamp, CsvRecord};
pub use sync_reader::SyncReader;
