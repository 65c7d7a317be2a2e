//! Asynchronous CSV reader with batch interface
//!
//! Provides a streaming interface over amount records from a CSV file.
//! Supports batch reading for efficient async processing.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - futures `AsyncRead`, so any async source (tokio file via compat, cursor) works
//! - Batch reading for efficient processing
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of AmountRecords
//!                  ↓
//!           csv_format module
//!              (CsvRecord)
//! ```

use crate::io::csv_format::CsvRecord;
use crate::types::AmountRecord;
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
///
/// Provides batch reading interface over amount records.
/// Maintains streaming behavior with constant memory usage.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    skipped: usize,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            skipped: 0,
        }
    }

    /// Read a batch of amount records
    ///
    /// Reads up to `batch_size` records. Rows that cannot be deserialized are
    /// logged and skipped.
    ///
    /// # Returns
    ///
    /// A vector of records in file order.
    /// Returns an empty vector when the end of the file is reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<AmountRecord> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(csv_record)) => batch.push(AmountRecord::from(csv_record)),
                Some(Err(e)) => {
                    self.skipped += 1;
                    tracing::warn!("CSV parse error: {}", e);
                }
                None => break,
            }
        }

        batch
    }

    /// Number of rows skipped so far because they could not be deserialized
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::io::Cursor;

    #[tokio::test]
    async fn test_async_reader_read_batch() {
        let csv_content = "id,currency,amount\n1,USD,1.00\n2,EUR,\"1,00\"\n3,JPY,100\n";
        let mut async_reader = AsyncReader::new(Cursor::new(csv_content.as_bytes()));

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].id, 1);
        assert_eq!(batch[1].id, 2);
        assert_eq!(batch[1].amount, "1,00");

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].currency, "JPY");

        let batch = async_reader.read_batch(2).await;
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_empty_csv() {
        let mut async_reader = AsyncReader::new(Cursor::new("id,currency,amount\n".as_bytes()));

        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch.len(), 0);
    }

    #[tokio::test]
    async fn test_async_reader_skips_undeserializable_row() {
        let csv_content = "id,currency,amount\nabc,USD,1.00\n2,USD,2.00\n";
        let mut async_reader = AsyncReader::new(Cursor::new(csv_content.as_bytes()));

        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].id, 2);
        assert_eq!(async_reader.skipped(), 1);
    }

    #[tokio::test]
    async fn test_async_reader_whitespace_and_missing_amount() {
        let csv_content = "id,currency,amount\n  1  ,  USD  ,  5.00  \n2,USD\n";
        let mut async_reader = AsyncReader::new(Cursor::new(csv_content.as_bytes()));

        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].amount, "5.00");
        assert_eq!(batch[1].amount, "");
    }
}
