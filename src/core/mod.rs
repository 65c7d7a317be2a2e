//! Core parsing module
//!
//! This module contains the amount-parsing state machine:
//! - `state` - Parser states and character classification
//! - `parser` - The single-pass parser and its convenience entry points

pub mod parser;
pub mod state;

pub use parser::{parse_amount, parse_amount_for_currency, AmountParser};
pub use state::{CharClass, ParserState, Sign};
