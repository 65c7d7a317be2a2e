//! Locale descriptor consumed by the amount parser
//!
//! A `CurrencyFormat` tells the parser which character separates the integer
//! part from the fraction, which character groups integer digits in threes,
//! and how many minor-unit digits the currency carries.

use super::error::FormatError;

/// Largest supported number of minor-unit digits
///
/// `10^19` no longer fits in an `i64`, so a wider fraction could never be
/// combined with a non-zero integer part.
pub const MAX_MINOR_UNIT_DIGITS: u32 = 18;

/// Immutable locale descriptor for one currency
///
/// Owned by the caller and borrowed read-only by the parser. The type is
/// `Copy`, so it can be shared freely across threads and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyFormat {
    decimal_separator: char,
    group_separator: char,
    minor_unit_digits: u32,
}

impl CurrencyFormat {
    /// US dollar style: `1,234.56`
    pub const USD: CurrencyFormat = CurrencyFormat::new_unchecked('.', ',', 2);

    /// Continental euro style: `1.234,56`
    pub const EUR: CurrencyFormat = CurrencyFormat::new_unchecked(',', '.', 2);

    /// Yen style, no minor units: `1,234`
    pub const JPY: CurrencyFormat = CurrencyFormat::new_unchecked('.', ',', 0);

    /// Create a validated currency format
    ///
    /// # Errors
    ///
    /// - `SeparatorsCoincide` if both separators are the same character
    /// - `InvalidSeparator` if a separator is an ASCII digit, `+` or `-`
    /// - `TooManyMinorUnitDigits` if `minor_unit_digits` exceeds
    ///   [`MAX_MINOR_UNIT_DIGITS`]
    pub fn new(
        decimal_separator: char,
        group_separator: char,
        minor_unit_digits: u32,
    ) -> Result<Self, FormatError> {
        for separator in [decimal_separator, group_separator] {
            if separator.is_ascii_digit() || separator == '+' || separator == '-' {
                return Err(FormatError::InvalidSeparator(separator));
            }
        }
        if decimal_separator == group_separator {
            return Err(FormatError::SeparatorsCoincide(decimal_separator));
        }
        if minor_unit_digits > MAX_MINOR_UNIT_DIGITS {
            return Err(FormatError::TooManyMinorUnitDigits(minor_unit_digits));
        }

        Ok(Self::new_unchecked(
            decimal_separator,
            group_separator,
            minor_unit_digits,
        ))
    }

    /// Constructor for formats known to be valid at compile time
    pub(crate) const fn new_unchecked(
        decimal_separator: char,
        group_separator: char,
        minor_unit_digits: u32,
    ) -> Self {
        CurrencyFormat {
            decimal_separator,
            group_separator,
            minor_unit_digits,
        }
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    pub fn minor_unit_digits(&self) -> u32 {
        self.minor_unit_digits
    }
}
