//! States and character classes of the amount-parsing machine
//!
//! Every input character is classified once against the `CurrencyFormat`;
//! the parser then dispatches on `(ParserState, CharClass)`.

use crate::types::CurrencyFormat;

/// Leading sign of an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

/// Classification of one input character relative to a format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Sign(Sign),
    /// An ASCII digit with its numeric value
    Digit(u8),
    DecimalSeparator,
    GroupSeparator,
    Other,
}

impl CharClass {
    pub fn classify(character: char, format: &CurrencyFormat) -> Self {
        match character {
            '+' => CharClass::Sign(Sign::Positive),
            '-' => CharClass::Sign(Sign::Negative),
            '0'..='9' => CharClass::Digit(character as u8 - b'0'),
            c if c == format.decimal_separator() => CharClass::DecimalSeparator,
            c if c == format.group_separator() => CharClass::GroupSeparator,
            _ => CharClass::Other,
        }
    }
}

/// Position of the scanner within the amount grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Nothing but an optional sign consumed so far
    Start,
    /// The integer part is a single `0`
    AfterLeadingZero,
    /// Inside the integer part
    IntegerDigits {
        /// Digits since the start or the last grouping separator
        run: usize,
        /// Whether a grouping separator has been seen
        grouped: bool,
    },
    /// Grouping separator consumed, three digits still owed
    GroupDigit3,
    GroupDigit2,
    GroupDigit1,
    /// After the decimal separator
    FractionDigits {
        /// Digits still expected; validated when the separator was consumed
        remaining: u32,
    },
}
