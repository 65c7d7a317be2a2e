//! Record types for batch conversion
//!
//! An `AmountRecord` is one row of input: an identifier, a currency code and
//! the amount as typed. A `ConversionOutcome` is the matching row of output.

use super::amount::MinorUnits;
use super::error::ParseError;

/// Record identifier
///
/// Supports identifiers from 0 to 18,446,744,073,709,551,615
pub type RecordId = u64;

/// One amount to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountRecord {
    /// Caller-supplied identifier, echoed to the output
    pub id: RecordId,

    /// Currency code as written in the input (resolved during conversion)
    pub currency: String,

    /// The amount string exactly as it should be parsed
    pub amount: String,
}

/// Result of converting one `AmountRecord`
///
/// Conversion failures are part of the outcome rather than an error of the
/// pipeline: a rejected amount still produces an output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    /// Identifier copied from the input record
    pub id: RecordId,

    /// Currency code copied from the input record
    pub currency: String,

    /// The parsed amount, or the reason it was rejected
    pub result: Result<MinorUnits, ParseError>,
}

impl ConversionOutcome {
    pub fn is_converted(&self) -> bool {
        self.result.is_ok()
    }
}
