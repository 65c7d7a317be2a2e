//! Amount parser
//!
//! Converts a locale-formatted amount such as `"-1,123.02"` into an exact
//! signed count of minor units in a single left-to-right pass.
//!
//! # Grammar
//!
//! ```text
//! amount   := sign? integer fraction?
//! sign     := '+' | '-'
//! integer  := '0' | lead (group-sep d d d)* | lead-any
//! lead     := [1-9] d? d?              (when grouping separators are used)
//! lead-any := [1-9] d*                 (when they are not)
//! fraction := decimal-sep d{minor_unit_digits}
//! ```
//!
//! An amount without a fraction is scaled by `10^minor_unit_digits`. A
//! currency with no minor units accepts no decimal separator at all.
//!
//! The magnitude is accumulated unsigned and converted at the end, so
//! `i64::MIN` is reachable and any overflow is reported as
//! [`ParseError::AmountTooLarge`] instead of wrapping.

use super::state::{CharClass, ParserState, Sign};
use crate::types::{Currency, CurrencyFormat, MinorUnits, ParseError};

/// Digits in every group after a grouping separator
const GROUP_WIDTH: usize = 3;

/// Parser bound to one `CurrencyFormat`
///
/// Holds no state between calls; one parser can be reused for any number of
/// amounts and shared across threads.
///
/// # Examples
///
/// ```
/// use amount_parser::{AmountParser, CurrencyFormat};
///
/// let parser = AmountParser::new(&CurrencyFormat::USD);
/// assert_eq!(parser.parse("+1,321.02"), Ok(132102));
/// assert_eq!(parser.parse("-123"), Ok(-12300));
/// assert!(parser.parse("01.00").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AmountParser<'a> {
    format: &'a CurrencyFormat,
}

impl<'a> AmountParser<'a> {
    pub fn new(format: &'a CurrencyFormat) -> Self {
        AmountParser { format }
    }

    /// Parse an amount into a signed count of minor units
    ///
    /// # Errors
    ///
    /// Returns the first grammar violation found, annotated with its
    /// character offset where one applies, or `AmountTooLarge` if the value
    /// does not fit in an `i64`.
    pub fn parse(&self, amount: &str) -> Result<i64, ParseError> {
        if amount.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let total = amount.chars().count();
        let mut state = ParserState::Start;
        let mut sign = Sign::Positive;
        let mut magnitude: u64 = 0;

        for (offset, character) in amount.chars().enumerate() {
            let class = CharClass::classify(character, self.format);
            let remaining = total - offset - 1;

            state = match (state, class) {
                (ParserState::Start, CharClass::Sign(leading)) if offset == 0 => {
                    sign = leading;
                    ParserState::Start
                }
                (ParserState::Start, CharClass::Digit(0)) => ParserState::AfterLeadingZero,
                (ParserState::Start, CharClass::Digit(digit)) => {
                    magnitude = u64::from(digit);
                    ParserState::IntegerDigits {
                        run: 1,
                        grouped: false,
                    }
                }

                (
                    ParserState::AfterLeadingZero | ParserState::IntegerDigits { .. },
                    CharClass::DecimalSeparator,
                ) => self.enter_fraction(offset, character, remaining)?,

                // A complete group was just closed, a fourth digit cannot follow
                (ParserState::IntegerDigits { grouped: true, .. }, CharClass::Digit(_)) => {
                    return Err(ParseError::invalid_group(offset))
                }
                (ParserState::IntegerDigits { run, grouped: false }, CharClass::Digit(digit)) => {
                    magnitude = push_digit(magnitude, digit)?;
                    ParserState::IntegerDigits {
                        run: run + 1,
                        grouped: false,
                    }
                }
                (ParserState::IntegerDigits { run, .. }, CharClass::GroupSeparator) => {
                    if run > GROUP_WIDTH || remaining < GROUP_WIDTH {
                        return Err(ParseError::invalid_group(offset));
                    }
                    ParserState::GroupDigit3
                }

                (ParserState::GroupDigit3, CharClass::Digit(digit)) => {
                    magnitude = push_digit(magnitude, digit)?;
                    ParserState::GroupDigit2
                }
                (ParserState::GroupDigit2, CharClass::Digit(digit)) => {
                    magnitude = push_digit(magnitude, digit)?;
                    ParserState::GroupDigit1
                }
                (ParserState::GroupDigit1, CharClass::Digit(digit)) => {
                    magnitude = push_digit(magnitude, digit)?;
                    ParserState::IntegerDigits {
                        run: GROUP_WIDTH,
                        grouped: true,
                    }
                }
                (
                    ParserState::GroupDigit3 | ParserState::GroupDigit2 | ParserState::GroupDigit1,
                    _,
                ) => return Err(ParseError::invalid_group(offset)),

                (ParserState::FractionDigits { remaining: 0 }, _) => {
                    unreachable!("fraction width is checked when the decimal separator is consumed")
                }
                (ParserState::FractionDigits { remaining: owed }, CharClass::Digit(digit)) => {
                    magnitude = push_digit(magnitude, digit)?;
                    ParserState::FractionDigits {
                        remaining: owed - 1,
                    }
                }

                (
                    ParserState::Start
                    | ParserState::AfterLeadingZero
                    | ParserState::IntegerDigits { .. }
                    | ParserState::FractionDigits { .. },
                    _,
                ) => return Err(ParseError::unexpected(offset, character)),
            };
        }

        let magnitude = match state {
            ParserState::Start => return Err(ParseError::MissingDigits),
            ParserState::AfterLeadingZero => 0,
            ParserState::IntegerDigits { .. } => {
                scale_to_minor_units(magnitude, self.format.minor_unit_digits())?
            }
            ParserState::GroupDigit3 | ParserState::GroupDigit2 | ParserState::GroupDigit1 => {
                return Err(ParseError::invalid_group(total))
            }
            ParserState::FractionDigits { remaining: 0 } => magnitude,
            ParserState::FractionDigits { .. } => {
                unreachable!("fraction width is checked when the decimal separator is consumed")
            }
        };

        apply_sign(sign, magnitude)
    }

    /// Parse an amount and keep its minor-unit scale alongside the value
    pub fn parse_minor_units(&self, amount: &str) -> Result<MinorUnits, ParseError> {
        let value = self.parse(amount)?;
        Ok(MinorUnits::new(value, self.format.minor_unit_digits()))
    }

    fn enter_fraction(
        &self,
        offset: usize,
        separator: char,
        remaining: usize,
    ) -> Result<ParserState, ParseError> {
        let expected = self.format.minor_unit_digits();
        if expected == 0 {
            return Err(ParseError::unexpected(offset, separator));
        }
        if remaining != expected as usize {
            return Err(ParseError::invalid_fraction(offset, expected, remaining));
        }
        Ok(ParserState::FractionDigits {
            remaining: expected,
        })
    }
}

/// Parse `amount` with `format` into a signed count of minor units
pub fn parse_amount(amount: &str, format: &CurrencyFormat) -> Result<i64, ParseError> {
    AmountParser::new(format).parse(amount)
}

/// Resolve `code` in the currency registry, then parse `amount` with its format
///
/// # Errors
///
/// `UnsupportedCurrency` for codes the registry does not know, otherwise the
/// same errors as [`parse_amount`].
pub fn parse_amount_for_currency(amount: &str, code: &str) -> Result<i64, ParseError> {
    let currency: Currency = code.parse()?;
    parse_amount(amount, &currency.format())
}

fn push_digit(magnitude: u64, digit: u8) -> Result<u64, ParseError> {
    magnitude
        .checked_mul(10)
        .and_then(|shifted| shifted.checked_add(u64::from(digit)))
        .ok_or(ParseError::AmountTooLarge)
}

fn scale_to_minor_units(magnitude: u64, minor_unit_digits: u32) -> Result<u64, ParseError> {
    10u64
        .checked_pow(minor_unit_digits)
        .and_then(|factor| magnitude.checked_mul(factor))
        .ok_or(ParseError::AmountTooLarge)
}

fn apply_sign(sign: Sign, magnitude: u64) -> Result<i64, ParseError> {
    match sign {
        Sign::Positive => i64::try_from(magnitude).map_err(|_| ParseError::AmountTooLarge),
        Sign::Negative => 0i64
            .checked_sub_unsigned(magnitude)
            .ok_or(ParseError::AmountTooLarge),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn usd(amount: &str) -> Result<i64, ParseError> {
        parse_amount(amount, &CurrencyFormat::USD)
    }

    #[rstest]
    #[case("-123", -12300)]
    #[case("-123.00", -12300)]
    #[case("-123.12", -12312)]
    #[case("-123.02", -12302)]
    #[case("+321", 32100)]
    #[case("+321.00", 32100)]
    #[case("+321.12", 32112)]
    #[case("+321.02", 32102)]
    #[case("456", 45600)]
    #[case("456.00", 45600)]
    #[case("456.12", 45612)]
    #[case("456.02", 45602)]
    #[case("0.02", 2)]
    #[case("+0.02", 2)]
    #[case("-0.02", -2)]
    #[case("0", 0)]
    #[case("-0", 0)]
    #[case("0.00", 0)]
    #[case("512312.22", 51231222)]
    fn test_usd_ungrouped(#[case] amount: &str, #[case] expected: i64) {
        assert_eq!(usd(amount), Ok(expected));
    }

    #[rstest]
    #[case("+1,321.02", 132102)]
    #[case("1,321", 132100)]
    #[case("12,110", 1211000)]
    #[case("12,110.12", 1211012)]
    #[case("-1,123.02", -112302)]
    #[case("123,456,789.01", 12345678901)]
    #[case("1,000,000", 100000000)]
    fn test_usd_grouped(#[case] amount: &str, #[case] expected: i64) {
        assert_eq!(usd(amount), Ok(expected));
    }

    #[rstest]
    #[case::leading_zero_digit("01.00", ParseError::unexpected(1, '1'))]
    #[case::leading_zero_group("0,123", ParseError::unexpected(1, ','))]
    #[case::leading_zero_after_sign("-00.10", ParseError::unexpected(2, '0'))]
    #[case::leading_decimal(".1211", ParseError::unexpected(0, '.'))]
    #[case::leading_group(",121,1", ParseError::unexpected(0, ','))]
    #[case::inner_space("12 110", ParseError::unexpected(2, ' '))]
    #[case::word("some.value", ParseError::unexpected(0, 's'))]
    #[case::double_sign("+-1", ParseError::unexpected(1, '-'))]
    #[case::trailing_sign("12-", ParseError::unexpected(2, '-'))]
    #[case::fraction_letter("1.2x", ParseError::unexpected(3, 'x'))]
    #[case::fraction_sign("1.-2", ParseError::unexpected(2, '-'))]
    #[case::leading_space(" 1", ParseError::unexpected(0, ' '))]
    fn test_unexpected_characters(#[case] amount: &str, #[case] expected: ParseError) {
        assert_eq!(usd(amount), Err(expected));
    }

    #[rstest]
    #[case::short("123.5", ParseError::invalid_fraction(3, 2, 1))]
    #[case::long("100.1211", ParseError::invalid_fraction(3, 2, 4))]
    #[case::zero_long("0.0000", ParseError::invalid_fraction(1, 2, 4))]
    #[case::zero_three("0.000", ParseError::invalid_fraction(1, 2, 3))]
    #[case::dangling("12.", ParseError::invalid_fraction(2, 2, 0))]
    #[case::zero_dangling("0.", ParseError::invalid_fraction(1, 2, 0))]
    #[case::two_separators("99.99.99", ParseError::invalid_fraction(2, 2, 5))]
    fn test_invalid_fraction_length(#[case] amount: &str, #[case] expected: ParseError) {
        assert_eq!(usd(amount), Err(expected));
    }

    #[rstest]
    #[case::short_second_group("1,4,56", 3)]
    #[case::fraction_like_group("123,42", 3)]
    #[case::long_leading_group("1234,567", 4)]
    #[case::long_trailing_group("1,2345", 5)]
    #[case::double_separator("1,,234", 2)]
    #[case::decimal_inside_group("1,23.45", 4)]
    #[case::separator_at_end("123,", 3)]
    #[case::letter_inside_group("1,2a4", 3)]
    fn test_invalid_group_size(#[case] amount: &str, #[case] offset: usize) {
        assert_eq!(usd(amount), Err(ParseError::invalid_group(offset)));
    }

    #[rstest]
    #[case::empty("", ParseError::EmptyInput)]
    #[case::plus_only("+", ParseError::MissingDigits)]
    #[case::minus_only("-", ParseError::MissingDigits)]
    fn test_degenerate_inputs(#[case] amount: &str, #[case] expected: ParseError) {
        assert_eq!(usd(amount), Err(expected));
    }

    #[rstest]
    #[case::max("92233720368547758.07", Ok(i64::MAX))]
    #[case::min("-92233720368547758.08", Ok(i64::MIN))]
    #[case::grouped_max("92,233,720,368,547,758.07", Ok(i64::MAX))]
    #[case::above_max("92233720368547758.08", Err(ParseError::AmountTooLarge))]
    #[case::below_min("-92233720368547758.09", Err(ParseError::AmountTooLarge))]
    #[case::scaling_overflow("92233720368547759", Err(ParseError::AmountTooLarge))]
    #[case::accumulator_overflow("184467440737095516160", Err(ParseError::AmountTooLarge))]
    fn test_range_limits(#[case] amount: &str, #[case] expected: Result<i64, ParseError>) {
        assert_eq!(usd(amount), expected);
    }

    #[rstest]
    #[case("-1.123,12", Ok(-112312))]
    #[case("1.234.567,89", Ok(123456789))]
    #[case("0,50", Ok(50))]
    #[case("123.42", Err(ParseError::invalid_group(3)))]
    #[case("1,234.56", Err(ParseError::invalid_fraction(1, 2, 6)))]
    fn test_eur_format(#[case] amount: &str, #[case] expected: Result<i64, ParseError>) {
        assert_eq!(parse_amount(amount, &CurrencyFormat::EUR), expected);
    }

    #[rstest]
    #[case("1,234", Ok(1234))]
    #[case("-500", Ok(-500))]
    #[case("0", Ok(0))]
    #[case("500.00", Err(ParseError::unexpected(3, '.')))]
    #[case("0.", Err(ParseError::unexpected(1, '.')))]
    #[case("5.", Err(ParseError::unexpected(1, '.')))]
    fn test_no_minor_units(#[case] amount: &str, #[case] expected: Result<i64, ParseError>) {
        assert_eq!(parse_amount(amount, &CurrencyFormat::JPY), expected);
    }

    #[rstest]
    #[case("1'234.50", Ok(123450))]
    #[case("1\u{202F}234,50", Ok(123450))]
    fn test_non_ascii_and_quote_separators(
        #[case] amount: &str,
        #[case] expected: Result<i64, ParseError>,
    ) {
        let swiss = CurrencyFormat::new('.', '\'', 2).unwrap();
        let french = CurrencyFormat::new(',', '\u{202F}', 2).unwrap();
        let format = if amount.contains('\'') { swiss } else { french };
        assert_eq!(parse_amount(amount, &format), expected);
    }

    #[test]
    fn test_offsets_count_characters_not_bytes() {
        let french = CurrencyFormat::new(',', '\u{202F}', 2).unwrap();
        assert_eq!(
            parse_amount("1\u{202F}234,5x", &french),
            Err(ParseError::unexpected(7, 'x'))
        );
        assert_eq!(
            parse_amount("1\u{202F}234,5", &french),
            Err(ParseError::invalid_fraction(5, 2, 1))
        );
    }

    #[test]
    fn test_three_minor_unit_digits() {
        let kwd = CurrencyFormat::new('.', ',', 3).unwrap();
        assert_eq!(parse_amount("1,234.567", &kwd), Ok(1234567));
        assert_eq!(parse_amount("12", &kwd), Ok(12000));
        assert_eq!(
            parse_amount("1.23", &kwd),
            Err(ParseError::invalid_fraction(1, 3, 2))
        );
    }

    #[test]
    fn test_parse_minor_units_keeps_scale() {
        let parser = AmountParser::new(&CurrencyFormat::USD);
        let amount = parser.parse_minor_units("-1,123.02").unwrap();
        assert_eq!(amount.value(), -112302);
        assert_eq!(amount.minor_unit_digits(), 2);
        assert_eq!(amount.to_string(), "-1123.02");
    }

    #[test]
    fn test_parser_is_reusable() {
        let parser = AmountParser::new(&CurrencyFormat::USD);
        assert_eq!(parser.parse("1.00"), Ok(100));
        assert!(parser.parse("1.0").is_err());
        assert_eq!(parser.parse("2.00"), Ok(200));
    }

    #[rstest]
    #[case("-123.12", "USD", Ok(-12312))]
    #[case("-1.123,12", "eur", Ok(-112312))]
    #[case("1,500", "JPY", Ok(1500))]
    #[case("1.00", "XYZ", Err(ParseError::unsupported_currency("XYZ")))]
    fn test_parse_amount_for_currency(
        #[case] amount: &str,
        #[case] code: &str,
        #[case] expected: Result<i64, ParseError>,
    ) {
        assert_eq!(parse_amount_for_currency(amount, code), expected);
    }
}
