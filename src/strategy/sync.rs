//! Synchronous processing strategy
//!
//! This module provides a synchronous, single-threaded implementation of the
//! ProcessingStrategy trait. It orchestrates conversion by coordinating
//! between the SyncReader (for CSV input), the amount parser and the CSV writer.
//!
//! # Memory Efficiency
//!
//! Rows are streamed: each record is read, converted and written before the
//! next one is read, so memory usage does not grow with the input.

use crate::io::csv_format::{convert_record, write_header, write_outcome};
use crate::io::sync_reader::SyncReader;
use crate::strategy::{ProcessSummary, ProcessingStrategy};
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use amount_parser::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("amounts.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Stream records through the parser and write one row per record
    ///
    /// Fatal errors (file not found, write errors) are returned immediately.
    /// Rows that are not valid CSV records are logged and skipped.
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<ProcessSummary, String> {
        let reader = SyncReader::new(input_path)?;
        let mut writer = csv::Writer::from_writer(output);
        let mut summary = ProcessSummary::default();

        write_header(&mut writer)?;

        for result in reader {
            match result {
                Ok(record) => {
                    let outcome = convert_record(&record);
                    summary.record(&outcome);
                    write_outcome(&mut writer, &outcome)?;
                }
                Err(e) => {
                    summary.skipped += 1;
                    tracing::warn!("{}", e);
                }
            }
        }

        writer
            .flush()
            .map_err(|e| format!("Failed to flush output: {}", e))?;

        tracing::info!(
            converted = summary.converted,
            rejected = summary.rejected,
            skipped = summary.skipped,
            "sync conversion finished"
        );

        Ok(summary)
    }
}
