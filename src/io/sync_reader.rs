//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over amount records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding Result<AmountRecord, String>
//! for each CSV row:
//!
//! ```no_run
//! use amount_parser::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("amounts.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Converting amount: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Rows that cannot be deserialized are yielded as Err variants in the iterator
//! - Line numbers are included in error messages for debugging
//!
//! Amount strings are not validated here; a row with a malformed amount is a
//! valid record whose conversion will be rejected.

use crate::io::csv_format::CsvRecord;
use crate::types::AmountRecord;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
///
/// Provides an iterator interface over amount records.
/// Maintains streaming behavior with constant memory usage.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (for a missing amount field)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if file opened successfully
    /// * `Err(String)` if file could not be opened
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<AmountRecord, String>;

    /// Get the next amount record from the CSV file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(AmountRecord))` - Successfully deserialized record
    /// * `Some(Err(String))` - CSV error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();
        let next = deserializer.next()?;
        self.line_num += 1;

        // +1 for the header row
        Some(
            next.map(AmountRecord::from)
                .map_err(|e| format!("Line {}: CSV parse error: {}", self.line_num + 1, e)),
        )
    }
}
