//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `format`: the locale descriptor consumed by the parser
//! - `currency`: the currency-code registry
//! - `amount`: parsed amounts in minor units
//! - `record`: input and output rows for batch conversion
//! - `error`: Error types for the parser

pub mod amount;
pub mod currency;
pub mod error;
pub mod format;
pub mod record;

pub use amount::MinorUnits;
pub use currency::Currency;
pub use error::{FormatError, ParseError};
pub use format::{CurrencyFormat, MAX_MINOR_UNIT_DIGITS};
pub use record::{AmountRecord, ConversionOutcome, RecordId};
