//! CSV format handling for amount records and conversion output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Conversion of a record into minor units
//! - Outcome serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::core::AmountParser;
use crate::types::{AmountRecord, ConversionOutcome, Currency, RecordId};
use serde::Deserialize;
use std::io::Write;

/// Header written before the converted rows
pub const OUTPUT_HEADER: [&str; 5] = ["id", "currency", "minor_units", "amount", "error"];

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: id, currency, amount.
/// Amounts containing the delimiter (`"1,234.56"`) must be quoted.
/// The amount field is optional so that a short row still produces an
/// output row (rejected as empty) instead of disappearing.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub id: RecordId,
    pub currency: String,
    pub amount: Option<String>,
}

impl From<CsvRecord> for AmountRecord {
    fn from(csv_record: CsvRecord) -> Self {
        AmountRecord {
            id: csv_record.id,
            currency: csv_record.currency,
            amount: csv_record.amount.unwrap_or_default(),
        }
    }
}

/// Convert one amount record into minor units
///
/// Resolves the currency code through the registry and parses the amount
/// with that currency's format. Never fails: an unknown currency or a
/// malformed amount is carried in the outcome.
pub fn convert_record(record: &AmountRecord) -> ConversionOutcome {
    let result = record.currency.parse::<Currency>().and_then(|currency| {
        let format = currency.format();
        AmountParser::new(&format).parse_minor_units(&record.amount)
    });

    if let Err(e) = &result {
        tracing::debug!(id = record.id, amount = %record.amount, "rejected amount: {}", e);
    }

    ConversionOutcome {
        id: record.id,
        currency: record.currency.clone(),
        result,
    }
}

/// Write the output header
pub fn write_header<W: Write>(writer: &mut csv::Writer<W>) -> Result<(), String> {
    writer
        .write_record(OUTPUT_HEADER)
        .map_err(|e| format!("Failed to write CSV header: {}", e))
}

/// Write one conversion outcome as a CSV row
///
/// Converted rows carry the integer minor units and the exact major-unit
/// amount; rejected rows leave both empty and carry the error message.
pub fn write_outcome<W: Write>(
    writer: &mut csv::Writer<W>,
    outcome: &ConversionOutcome,
) -> Result<(), String> {
    let (minor_units, amount, error) = match &outcome.result {
        Ok(minor) => (minor.value().to_string(), minor.to_string(), String::new()),
        Err(e) => (String::new(), String::new(), e.to_string()),
    };

    writer
        .write_record([
            outcome.id.to_string(),
            outcome.currency.clone(),
            minor_units,
            amount,
            error,
        ])
        .map_err(|e| format!("Failed to write outcome record: {}", e))
}

/// Write conversion outcomes to CSV format
///
/// Writes the header followed by one row per outcome, in the order given.
///
/// # Arguments
///
/// * `outcomes` - Slice of outcomes to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_outcomes_csv(
    outcomes: &[ConversionOutcome],
    output: &mut dyn Write,
) -> Result<(), String> {
    let mut writer = csv::Writer::from_writer(output);

    write_header(&mut writer)?;
    for outcome in outcomes {
        write_outcome(&mut writer, outcome)?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
