//! Asynchronous batch processing strategy
//!
//! This module provides an asynchronous, multi-threaded implementation of the
//! ProcessingStrategy trait. Records are read in batches and each batch is
//! converted in parallel on a tokio multi-threaded runtime.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     └── convert_batch (chunking + one tokio task per chunk)
//! ```
//!
//! # Ordering
//!
//! Batches are read and written sequentially. Within a batch the records are
//! split into contiguous chunks, converted on separate tasks, and the chunk
//! results are re-joined in chunk order, so output rows keep input order.
//! Tasks share nothing: each owns its chunk and returns its outcomes.

use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::{convert_record, write_header, write_outcome};
use crate::strategy::{ProcessSummary, ProcessingStrategy};
use crate::types::{AmountRecord, ConversionOutcome};
use std::io::Write;
use std::path::Path;

/// Configuration for batch processing
///
/// Controls how records are batched and how many worker threads convert
/// each batch.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of records per batch
    pub batch_size: usize,
    /// Maximum number of chunks converted concurrently (also the worker thread count)
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size,
                default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            tracing::warn!(
                "Invalid max_concurrent_batches ({}), using default ({})",
                max_concurrent_batches,
                default.max_concurrent_batches
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    /// Batch processing configuration
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Read batches, convert each in parallel, write rows in input order
    ///
    /// Fatal errors (file not found, runtime or write errors) are returned
    /// immediately. Rows that are not valid CSV records are logged and skipped.
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<ProcessSummary, String> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

        runtime.block_on(async {
            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| format!("Failed to open file '{}': {}", input_path.display(), e))?;

            // Wrap tokio file in a compatibility layer for csv-async
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            let mut writer = csv::Writer::from_writer(output);
            let mut summary = ProcessSummary::default();
            write_header(&mut writer)?;

            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }

                let outcomes = convert_batch(batch, self.config.max_concurrent_batches).await?;
                for outcome in &outcomes {
                    summary.record(outcome);
                    write_outcome(&mut writer, outcome)?;
                }
            }

            summary.skipped = reader.skipped();
            writer
                .flush()
                .map_err(|e| format!("Failed to flush output: {}", e))?;

            tracing::info!(
                converted = summary.converted,
                rejected = summary.rejected,
                skipped = summary.skipped,
                "async conversion finished"
            );

            Ok(summary)
        })
    }
}

/// Convert a batch on up to `workers` tasks, preserving record order
async fn convert_batch(
    batch: Vec<AmountRecord>,
    workers: usize,
) -> Result<Vec<ConversionOutcome>, String> {
    let total = batch.len();
    let chunk_size = total.div_ceil(workers.max(1)).max(1);

    let mut records = batch.into_iter();
    let mut handles = Vec::with_capacity(workers);
    loop {
        let chunk: Vec<AmountRecord> = records.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }
        handles.push(tokio::spawn(async move {
            chunk.iter().map(convert_record).collect::<Vec<_>>()
        }));
    }

    let mut outcomes = Vec::with_capacity(total);
    for joined in futures::future::join_all(handles).await {
        let chunk_outcomes = joined.map_err(|e| format!("Conversion task failed: {}", e))?;
        outcomes.extend(chunk_outcomes);
    }

    Ok(outcomes)
}
