//! Error types for the amount parser
//!
//! This module defines the errors that can occur while building a currency
//! format or converting an amount string into minor units.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Format Errors**: a `CurrencyFormat` whose separators are ambiguous
//! - **Grammar Errors**: malformed amounts, annotated with the offending offset
//! - **Range Errors**: amounts that do not fit in a signed 64-bit integer
//! - **Lookup Errors**: unknown currency codes at the boundary wrapper
//!
//! Offsets are counted in characters (Unicode scalar values), not bytes.

use thiserror::Error;

/// Error returned when a `CurrencyFormat` violates its own invariants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Decimal and grouping separators are the same character
    #[error("decimal and grouping separators are both '{0}'")]
    SeparatorsCoincide(char),

    /// A separator is a digit or a sign character
    #[error("'{0}' cannot be used as a separator")]
    InvalidSeparator(char),

    /// More minor-unit digits than a 64-bit amount can carry
    #[error("{0} minor-unit digits exceeds the supported maximum of 18")]
    TooManyMinorUnitDigits(u32),
}

/// Error returned when an amount string cannot be converted to minor units
///
/// Every grammar violation is reported at the first offending character;
/// the scan never continues past it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input string was empty
    #[error("amount is empty")]
    EmptyInput,

    /// The input consisted of a sign and nothing else
    #[error("amount has no digits")]
    MissingDigits,

    /// A character that the grammar does not allow at this position
    ///
    /// Also covers the leading zero rule (`"01.00"`, `"0,123"`) and a
    /// decimal separator in a currency without minor units.
    #[error("unexpected character '{character}' at offset {offset}")]
    UnexpectedCharacter {
        /// Character offset of the rejected character
        offset: usize,
        /// The rejected character
        character: char,
    },

    /// Wrong number of characters after the decimal separator
    #[error("expected {expected} digits after the decimal separator at offset {offset}, found {found}")]
    InvalidFractionLength {
        /// Character offset of the decimal separator
        offset: usize,
        /// Number of minor-unit digits the format requires
        expected: u32,
        /// Number of characters actually following the separator
        found: usize,
    },

    /// A grouping separator without a complete three-digit group around it
    #[error("incomplete digit group at offset {offset}")]
    InvalidGroupSize {
        /// Character offset where the group broke (input length if it ended early)
        offset: usize,
    },

    /// The amount does not fit in a signed 64-bit count of minor units
    #[error("amount is too large to be represented in minor units")]
    AmountTooLarge,

    /// The currency code is not in the registry
    #[error("unsupported currency '{code}'")]
    UnsupportedCurrency {
        /// The code as it was supplied
        code: String,
    },
}

impl ParseError {
    /// Create an UnexpectedCharacter error
    pub fn unexpected(offset: usize, character: char) -> Self {
        ParseError::UnexpectedCharacter { offset, character }
    }

    /// Create an InvalidGroupSize error
    pub fn invalid_group(offset: usize) -> Self {
        ParseError::InvalidGroupSize { offset }
    }

    /// Create an InvalidFractionLength error
    pub fn invalid_fraction(offset: usize, expected: u32, found: usize) -> Self {
        ParseError::InvalidFractionLength {
            offset,
            expected,
            found,
        }
    }

    /// Create an UnsupportedCurrency error
    pub fn unsupported_currency(code: &str) -> Self {
        ParseError::UnsupportedCurrency {
            code: code.to_string(),
        }
    }
}
