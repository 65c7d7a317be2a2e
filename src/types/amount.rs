//! Parsed amount paired with its minor-unit scale

use rust_decimal::Decimal;
use std::fmt;

/// Signed count of minor units together with the number of minor-unit digits
///
/// The integer is the exact parse result; `to_decimal` recovers the amount
/// in major units without any floating-point step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinorUnits {
    value: i64,
    minor_unit_digits: u32,
}

impl MinorUnits {
    pub fn new(value: i64, minor_unit_digits: u32) -> Self {
        MinorUnits {
            value,
            minor_unit_digits,
        }
    }

    /// The amount as an integer count of minor units
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn minor_unit_digits(&self) -> u32 {
        self.minor_unit_digits
    }

    /// The amount in major units, e.g. `-12312` cents becomes `-123.12`
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.value, self.minor_unit_digits)
    }
}

impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl From<MinorUnits> for i64 {
    fn from(amount: MinorUnits) -> Self {
        amount.value
    }
}
