//! Currency registry
//!
//! Maps a currency code to the `CurrencyFormat` used to parse its amounts.
//! The parser core never looks currencies up itself; this registry only backs
//! the `parse_amount_for_currency` boundary wrapper and the CSV front end.

use super::error::ParseError;
use super::format::CurrencyFormat;
use std::fmt;
use std::str::FromStr;

/// Currencies known to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    /// US dollar, `1,234.56`
    Usd,
    /// Euro, `1.234,56`
    Eur,
    /// Pound sterling, `1,234.56`
    Gbp,
    /// Japanese yen, no minor units
    Jpy,
    /// Swiss franc, `1'234.56`
    Chf,
    /// Kuwaiti dinar, three minor-unit digits
    Kwd,
}

impl Currency {
    pub const ALL: [Currency; 6] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Chf,
        Currency::Kwd,
    ];

    /// The upper-case currency code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Chf => "CHF",
            Currency::Kwd => "KWD",
        }
    }

    /// The format amounts in this currency are written in
    pub fn format(&self) -> CurrencyFormat {
        match self {
            Currency::Usd | Currency::Gbp => CurrencyFormat::USD,
            Currency::Eur => CurrencyFormat::EUR,
            Currency::Jpy => CurrencyFormat::JPY,
            Currency::Chf => CurrencyFormat::new_unchecked('.', '\'', 2),
            Currency::Kwd => CurrencyFormat::new_unchecked('.', ',', 3),
        }
    }
}

impl FromStr for Currency {
    type Err = ParseError;

    /// Resolve a currency code, ignoring case and surrounding whitespace
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let trimmed = code.trim();
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::unsupported_currency(code))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
