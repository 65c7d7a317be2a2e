//! Processing strategy module for batch amount conversion
//!
//! This module defines the Strategy pattern for complete conversion pipelines,
//! encompassing CSV parsing, amount conversion and output. This allows different
//! processing implementations (synchronous, asynchronous batch) to be selected at runtime.
//! Both strategies produce byte-identical output for the same input.

use crate::cli::StrategyType;
use crate::types::ConversionOutcome;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Counts gathered over one processing run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Rows whose amount was converted to minor units
    pub converted: usize,
    /// Rows written with an error instead of an amount
    pub rejected: usize,
    /// Rows that could not be read as CSV records and produced no output
    pub skipped: usize,
}

impl ProcessSummary {
    /// Count one written outcome
    pub fn record(&mut self, outcome: &ConversionOutcome) {
        if outcome.is_converted() {
            self.converted += 1;
        } else {
            self.rejected += 1;
        }
    }
}

/// Processing strategy trait for complete conversion pipelines
///
/// Each strategy must be able to read amount records from a CSV file, convert
/// them to minor units, and write one output row per record in input order.
pub trait ProcessingStrategy: Send + Sync {
    /// Process amounts from input file and write results to output
    ///
    /// # Returns
    ///
    /// * `Ok(ProcessSummary)` if all processing completed (rejected amounts included)
    /// * `Err(String)` if a fatal error occurred (file not found, I/O error, etc.)
    ///
    /// Malformed CSV rows are logged and skipped; malformed amounts are not
    /// errors of the pipeline and are reported in the output row instead.
    fn process(&self, input_path: &Path, output: &mut dyn Write)
        -> Result<ProcessSummary, String>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional configuration for async batch processing (ignored for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MinorUnits, ParseError};

    #[test]
    fn test_summary_counts_outcomes() {
        let mut summary = ProcessSummary::default();
        summary.record(&ConversionOutcome {
            id: 1,
            currency: "USD".to_string(),
            result: Ok(MinorUnits::new(100, 2)),
        });
        summary.record(&ConversionOutcome {
            id: 2,
            currency: "USD".to_string(),
            result: Err(ParseError::EmptyInput),
        });

        assert_eq!(
            summary,
            ProcessSummary {
                converted: 1,
                rejected: 1,
                skipped: 0
            }
        );
    }
}
