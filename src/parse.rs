// Copyright 2021 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Decimal parsing utilities.

use crate::bint::Bint;
use crate::decimal::Decimal;
use crate::error::{DecimalError, Result};
use crate::precision::{check_precision, default_precision};
use crate::uint::MAX_POW10_U128;
use num_bigint::BigUint;
use std::str::FromStr;

#[derive(Debug, PartialEq)]
enum Sign {
    Positive,
    Negative,
}

/// The interesting parts of a decimal string.
#[derive(Debug)]
struct Parts<'a> {
    sign: Sign,
    integral: &'a [u8],
    fractional: &'a [u8],
}

/// What to do with fractional digits beyond the precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Excess {
    Reject,
    Truncate,
}

/// Splits a decimal string bytes into sign and the rest, without inspecting or validating the rest.
#[inline]
fn extract_sign(s: &[u8]) -> (Sign, &[u8]) {
    match s.first() {
        Some(b'+') => (Sign::Positive, &s[1..]),
        Some(b'-') => (Sign::Negative, &s[1..]),
        _ => (Sign::Positive, s),
    }
}

/// Carves off decimal digits up to the first non-digit character.
#[inline]
fn eat_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let i = s.iter().take_while(|&i| i.is_ascii_digit()).count();
    (&s[..i], &s[i..])
}

/// Checks if the input is `digits` or `digits.digits` after an optional sign, and if so,
/// locates the integral and fractional parts in it.
fn split_decimal(s: &[u8]) -> Option<Parts> {
    let (sign, s) = extract_sign(s);

    let (integral, s) = eat_digits(s);
    if integral.is_empty() {
        return None;
    }

    let fractional = match s.split_first() {
        None => &b""[..],
        Some((&b'.', s)) => {
            let (fractional, s) = eat_digits(s);
            if fractional.is_empty() || !s.is_empty() {
                return None;
            }
            fractional
        }
        Some(_) => return None,
    };

    Some(Parts {
        sign,
        integral,
        fractional,
    })
}

/// Builds the coefficient `integral ++ fractional` from validated ASCII digits.
fn coef_from_digits(integral: &[u8], fractional: &[u8]) -> Option<Bint> {
    let zeros = integral.iter().take_while(|&&i| i == b'0').count();
    let integral = &integral[zeros..];

    if integral.len() + fractional.len() <= MAX_POW10_U128 as usize {
        let mut int = 0u128;
        for &i in integral.iter().chain(fractional) {
            int = int * 10 + (i - b'0') as u128;
        }
        return Some(Bint::from_u128(int));
    }

    let mut digits = Vec::with_capacity(integral.len() + fractional.len());
    digits.extend_from_slice(integral);
    digits.extend_from_slice(fractional);
    BigUint::parse_bytes(&digits, 10).map(Bint::from_big)
}

/// Parses `s` with at most `prec` fractional digits.
///
/// Trailing fractional zeros are counted against `prec` before being trimmed.
pub(crate) fn parse_str(s: &str, prec: u8, excess: Excess) -> Result<Decimal> {
    if s.is_empty() {
        return Err(DecimalError::EmptyString);
    }

    let Parts {
        sign,
        integral,
        mut fractional,
    } = split_decimal(s.as_bytes()).ok_or_else(|| DecimalError::invalid_input(s))?;

    if fractional.len() > prec as usize {
        match excess {
            Excess::Reject => return Err(DecimalError::PrecisionOutOfRange),
            Excess::Truncate => fractional = &fractional[..prec as usize],
        }
    }

    while fractional.last() == Some(&b'0') {
        fractional = &fractional[..fractional.len() - 1];
    }

    let coef = coef_from_digits(integral, fractional).ok_or_else(|| DecimalError::invalid_input(s))?;
    Ok(Decimal::new(sign == Sign::Negative, coef, fractional.len() as u8))
}

impl Decimal {
    /// Parses a decimal string, accepting at most [`default_precision`] fractional digits.
    ///
    /// The grammar is an optional sign followed by `digits` or `digits.digits`.
    /// Trailing fractional zeros are trimmed, and `-0` is the same value as `0`.
    ///
    /// [`default_precision`]: crate::default_precision
    #[inline]
    pub fn parse(s: &str) -> Result<Decimal> {
        parse_str(s, default_precision(), Excess::Reject)
    }

    /// Parses a decimal string, accepting at most `prec` fractional digits.
    ///
    /// Returns `PrecisionOutOfRange` if `prec` is greater than [`MAX_SCALE`].
    ///
    /// [`MAX_SCALE`]: crate::MAX_SCALE
    #[inline]
    pub fn parse_with_precision(s: &str, prec: u8) -> Result<Decimal> {
        parse_str(s, check_precision(prec)?, Excess::Reject)
    }

    /// Parses a decimal string.
    ///
    /// # Panics
    ///
    /// Panics if `s` is not a valid decimal.
    #[inline]
    pub fn must_parse(s: &str) -> Decimal {
        match Decimal::parse(s) {
            Ok(d) => d,
            Err(e) => panic!("{}", e),
        }
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        Decimal::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_parse<S: AsRef<str>, V: AsRef<str>>(s: S, expected: V) {
        let decimal = s.as_ref().parse::<Decimal>().unwrap();
        assert_eq!(decimal.to_string(), expected.as_ref(), "parse {}", s.as_ref());
    }

    fn assert_parse_err<S: AsRef<str>>(s: S, expected: DecimalError) {
        let result = s.as_ref().parse::<Decimal>();
        assert_eq!(result.unwrap_err(), expected, "parse {}", s.as_ref());
    }

    fn assert_invalid<S: AsRef<str>>(s: S) {
        let s = s.as_ref();
        assert_parse_err(s, DecimalError::InvalidFormat(format!("can't parse '{}'", s)));
    }

    #[test]
    fn test_parse_valid() {
        assert_parse("0", "0");
        assert_parse("-0", "0");
        assert_parse("-0.00000", "0");
        assert_parse("+0.0", "0");
        assert_parse("000123", "123");
        assert_parse("123", "123");
        assert_parse("+123.123", "123.123");
        assert_parse("-123.123", "-123.123");
        assert_parse("123.456000", "123.456");
        assert_parse("123.0000", "123");
        assert_parse("0.0000000000000000001", "0.0000000000000000001");
        assert_parse("123.456789012345678901", "123.456789012345678901");
        assert_parse(
            "340282366920938463463374.607431768211456",
            "340282366920938463463374.607431768211456",
        );
        assert_parse(
            "34028236692093846346.3374607431768211455",
            "34028236692093846346.3374607431768211455",
        );
        assert_parse(
            "1234567890123456789012345678901234567890",
            "1234567890123456789012345678901234567890",
        );
        assert_parse(
            "340282366920938463463374607431768211459.123",
            "340282366920938463463374607431768211459.123",
        );
        assert_parse("-000000000000000000000000000000000000000001.5", "-1.5");
    }

    #[test]
    fn test_parse_representation() {
        let d = Decimal::parse("340282366920938463463374607431768211455").unwrap();
        assert!(!d.is_overflowed());
        let d = Decimal::parse("340282366920938463463374607431768211456").unwrap();
        assert!(d.is_overflowed());
        let d = Decimal::parse("0000000000000000000000000000000000000000000000012.5").unwrap();
        assert!(!d.is_overflowed());
        assert_eq!(d.coefficient(), Some(125));
        assert_eq!(d.scale(), 1);

        let d = Decimal::parse("-0.000").unwrap();
        assert!(!d.is_neg());
        assert_eq!(d.scale(), 0);
    }

    #[test]
    fn test_parse_invalid() {
        assert_parse_err("", DecimalError::EmptyString);

        assert_invalid("123.");
        assert_invalid(".");
        assert_invalid("+.");
        assert_invalid("+");
        assert_invalid("-");
        assert_invalid("--340282366920938463463374.607431768211456");
        assert_invalid("+-1");
        assert_invalid(".123456");
        assert_invalid("-.123456");
        assert_invalid("12c45.123456");
        assert_invalid("1245.-123456");
        assert_invalid("1245.123.456");
        assert_invalid("12345..123456");
        assert_invalid("123456.123c456");
        assert_invalid("abc.123");
        assert_invalid("123.1234567890123456abc");
        assert_invalid("1.12345678903.456");
        assert_invalid(" 1");
        assert_invalid("1 ");
        assert_invalid("1e5");
        assert_invalid("NaN");
    }

    #[test]
    fn test_parse_precision() {
        assert_parse_err("1.234567890123456789012348901", DecimalError::PrecisionOutOfRange);
        assert_parse_err("0.12345678901234567890", DecimalError::PrecisionOutOfRange);
        // trailing zeros are counted
        assert_parse_err("1.00000000000000000000", DecimalError::PrecisionOutOfRange);

        assert_eq!(Decimal::parse_with_precision("1.234", 3).unwrap().to_string(), "1.234");
        assert_eq!(
            Decimal::parse_with_precision("1.2345", 3).unwrap_err(),
            DecimalError::PrecisionOutOfRange
        );
        assert_eq!(Decimal::parse_with_precision("12", 0).unwrap().to_string(), "12");
        assert_eq!(
            Decimal::parse_with_precision("1", 20).unwrap_err(),
            DecimalError::PrecisionOutOfRange
        );
    }

    #[test]
    fn test_parse_truncate() {
        fn assert(s: &str, prec: u8, expected: &str) {
            let d = parse_str(s, prec, Excess::Truncate).unwrap();
            assert_eq!(d.to_string(), expected);
        }

        assert("1.1234567890123456789123", 19, "1.1234567890123456789");
        assert("1.99", 1, "1.9");
        assert("-1.99", 0, "-1");
        assert("-0.001", 2, "0");
        assert("1.5", 3, "1.5");
    }

    #[test]
    fn test_must_parse() {
        assert_eq!(Decimal::must_parse("-1.50"), Decimal::parse("-1.5").unwrap());
    }

    #[test]
    #[should_panic(expected = "invalid format: can't parse '1..2'")]
    fn test_must_parse_panics() {
        Decimal::must_parse("1..2");
    }

    fn canonical(neg: bool, int: u64, frac: &str) -> String {
        let frac = frac.trim_end_matches('0');
        let body = if frac.is_empty() {
            int.to_string()
        } else {
            format!("{}.{}", int, frac)
        };
        if neg && body != "0" {
            format!("-{}", body)
        } else {
            body
        }
    }

    proptest! {
        #[test]
        fn prop_round_trip(neg in any::<bool>(), int in any::<u64>(), frac in "[0-9]{0,19}") {
            let sign = if neg { "-" } else { "" };
            let s = if frac.is_empty() {
                format!("{}{}", sign, int)
            } else {
                format!("{}{}.{}", sign, int, frac)
            };

            let d = Decimal::parse(&s).unwrap();
            let text = d.to_string();
            prop_assert_eq!(&text, &canonical(neg, int, &frac));
            prop_assert_eq!(Decimal::parse(&text).unwrap(), d);
        }
    }
}
