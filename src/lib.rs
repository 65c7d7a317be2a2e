//! Amount Parser Library
//! # Overview
//!
//! Converts human-typed, locale-formatted monetary amounts (`"-1,123.02"`,
//! `"1.234,56"`) into exact signed counts of minor units (cents, pence, fils)
//! without ever going through floating point.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (CurrencyFormat, Currency, MinorUnits, errors)
//! - [`core`] - The parser:
//!   - [`core::state`] - Parser states and character classification
//!   - [`core::parser`] - Single-pass state machine and entry points
//! - [`io`] - CSV reading and writing for batch conversion
//! - [`strategy`] - Sync and async batch conversion pipelines
//! - [`cli`] - CLI arguments parsing and log setup
//!
//! # Example
//!
//! ```
//! use amount_parser::{parse_amount, parse_amount_for_currency, CurrencyFormat, ParseError};
//!
//! assert_eq!(parse_amount("-123.12", &CurrencyFormat::USD), Ok(-12312));
//! assert_eq!(parse_amount("-1.123,12", &CurrencyFormat::EUR), Ok(-112312));
//! assert_eq!(parse_amount_for_currency("1,500", "JPY"), Ok(1500));
//! assert!(matches!(
//!     parse_amount("123.5", &CurrencyFormat::USD),
//!     Err(ParseError::InvalidFractionLength { .. })
//! ));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use self::core::{parse_amount, parse_amount_for_currency, AmountParser};
pub use io::write_outcomes_csv;
pub use types::{
    AmountRecord, ConversionOutcome, Currency, CurrencyFormat, FormatError, MinorUnits,
    ParseError, RecordId,
};
