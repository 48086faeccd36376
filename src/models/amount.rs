use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// A monetary amount as typed into a form.
///
/// Text without a numeric prefix is kept as [`Amount::NotANumber`] rather
/// than rejected, so the value still reaches the list and renders as `NaN`.
/// Numbers outside the range of [`Decimal`] saturate instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount {
    Value(Decimal),
    NotANumber,
}

impl Amount {
    pub fn new(value: Decimal) -> Self {
        Amount::Value(value)
    }

    pub fn value(&self) -> Option<Decimal> {
        match self {
            Amount::Value(d) => Some(*d),
            Amount::NotANumber => None,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Amount::NotANumber)
    }

    /// Parses the longest numeric prefix of `text`, ignoring leading whitespace.
    ///
    /// `"12abc"` is 12, `"10,50"` is 10 and `"abc"` is not a number.
    pub fn parse(text: &str) -> Self {
        match numeric_prefix(text.trim_start()) {
            Some(prefix) => Amount::Value(prefix.to_decimal()),
            None => Amount::NotANumber,
        }
    }

    /// Renders with exactly `places` decimals, rounding half away from zero.
    pub fn to_fixed(&self, places: u32) -> String {
        match self {
            Amount::Value(d) => {
                let rounded =
                    d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
                format!("{:.*}", places as usize, rounded)
            }
            Amount::NotANumber => "NaN".to_string(),
        }
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Value(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Value(d) => write!(f, "{}", d),
            Amount::NotANumber => f.write_str("NaN"),
        }
    }
}

struct NumericPrefix<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
    exponent: Option<&'a str>,
}

/// Past this many powers of ten any non-zero mantissa has overflowed or
/// rounded away to zero.
const MAX_SHIFT: u64 = 64;

impl NumericPrefix<'_> {
    fn mantissa(&self) -> String {
        let mut mantissa = String::new();
        if self.negative {
            mantissa.push('-');
        }
        mantissa.push_str(if self.integer.is_empty() { "0" } else { self.integer });
        if !self.fraction.is_empty() {
            mantissa.push('.');
            mantissa.push_str(self.fraction);
        }
        mantissa
    }

    fn to_decimal(&self) -> Decimal {
        let mantissa = self.mantissa();
        let exact = match self.exponent {
            Some(exp) => Decimal::from_scientific(&format!("{}e{}", mantissa, exp)),
            None => Decimal::from_str(&mantissa),
        };
        exact.unwrap_or_else(|_| self.saturating(&mantissa))
    }

    /// Shifts the mantissa one power of ten at a time, clamping to the
    /// representable range.
    fn saturating(&self, mantissa: &str) -> Decimal {
        let limit = if self.negative { Decimal::MIN } else { Decimal::MAX };
        let Ok(mut value) = Decimal::from_str(mantissa) else {
            return limit;
        };

        let exp = self.exponent.map_or(0, |exp| {
            exp.parse::<i64>()
                .unwrap_or(if exp.starts_with('-') { i64::MIN } else { i64::MAX })
        });
        for _ in 0..exp.unsigned_abs().min(MAX_SHIFT) {
            let shifted = if exp < 0 {
                value.checked_div(Decimal::TEN)
            } else {
                value.checked_mul(Decimal::TEN)
            };
            match shifted {
                Some(next) => value = next,
                None if exp < 0 => return Decimal::ZERO,
                None => return limit,
            }
        }

        if value.is_zero() { Decimal::ZERO } else { value }
    }
}

fn numeric_prefix(text: &str) -> Option<NumericPrefix<'_>> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let integer = &text[int_start..pos];

    let mut fraction = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        fraction = &text[frac_start..end];
        if !integer.is_empty() || !fraction.is_empty() {
            pos = end;
        }
    }

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    // An exponent only counts when at least one digit follows the marker.
    let mut exponent = None;
    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && matches!(bytes[end], b'+' | b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = Some(&text[pos + 1..end]);
        }
    }

    Some(NumericPrefix {
        negative,
        integer,
        fraction,
        exponent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(Amount::parse("10"), Amount::Value(dec("10")));
        assert_eq!(Amount::parse("350.50"), Amount::Value(dec("350.50")));
        assert_eq!(Amount::parse("  42"), Amount::Value(dec("42")));
        assert_eq!(Amount::parse(".5"), Amount::Value(dec("0.5")));
        assert_eq!(Amount::parse("7."), Amount::Value(dec("7")));
    }

    #[test]
    fn stops_at_first_non_numeric_character() {
        assert_eq!(Amount::parse("12abc"), Amount::Value(dec("12")));
        assert_eq!(Amount::parse("10,50"), Amount::Value(dec("10")));
        assert_eq!(Amount::parse("3e"), Amount::Value(dec("3")));
    }

    #[test]
    fn honours_sign_and_exponent() {
        assert_eq!(Amount::parse("-5"), Amount::Value(dec("-5")));
        assert_eq!(Amount::parse("1.5e3"), Amount::Value(dec("1500")));
        assert_eq!(Amount::parse("25e-1"), Amount::Value(dec("2.5")));
    }

    #[test]
    fn non_numeric_text_is_nan() {
        assert!(Amount::parse("abc").is_nan());
        assert!(Amount::parse("-").is_nan());
        assert!(Amount::parse(".").is_nan());
        assert!(Amount::parse(" ").is_nan());
    }

    #[test]
    fn out_of_range_numbers_saturate() {
        assert_eq!(Amount::parse("1e30"), Amount::Value(Decimal::MAX));
        assert_eq!(Amount::parse("-1e30"), Amount::Value(Decimal::MIN));
        assert_eq!(
            Amount::parse("123456789012345678901234567890"),
            Amount::Value(Decimal::MAX)
        );
        assert_eq!(
            Amount::parse("100000000000000000000000000000"),
            Amount::Value(Decimal::MAX)
        );
        assert_eq!(Amount::parse("1e99999999999999999999"), Amount::Value(Decimal::MAX));
    }

    #[test]
    fn tiny_numbers_round_to_zero() {
        assert_eq!(Amount::parse("1e-30"), Amount::Value(Decimal::ZERO));
        assert_eq!(Amount::parse("-1e-30").to_fixed(2), "0.00");
        assert_eq!(Amount::parse("5e-28"), Amount::Value(dec("0.0000000000000000000000000005")));
    }

    #[test]
    fn fixed_formatting_pads_and_rounds() {
        assert_eq!(Amount::parse("10").to_fixed(2), "10.00");
        assert_eq!(Amount::parse("25.9").to_fixed(2), "25.90");
        assert_eq!(Amount::parse("0.125").to_fixed(2), "0.13");
        assert_eq!(Amount::NotANumber.to_fixed(2), "NaN");
    }
}
