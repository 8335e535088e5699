//! Money and numeric field helpers
//!
//! Form fields arrive as free text. They are parsed leniently (the
//! longest numeric prefix wins, anything else is absent) and all
//! arithmetic is done on `Decimal`. Display values are rounded to
//! 2 decimal places, half away from zero.

use rust_decimal::prelude::*;
use std::str::FromStr;

/// Rounding strategy for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Exponents beyond this cannot be represented by `Decimal` anyway
const MAX_EXPONENT: i64 = 56;

/// Parse the numeric prefix of a form field.
///
/// Leading whitespace is skipped and the longest prefix of the form
/// `[+-]digits[.digits][(e|E)[+-]digits]` is taken, so `"12abc"` reads
/// as 12 and `"5."` as 5. Returns `None` when no digits are found or the
/// value does not fit in a `Decimal`.
pub fn parse_number(raw: &str) -> Option<Decimal> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent: i64 = 0;
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        let exp_negative = match bytes.get(end) {
            Some(b'-') => {
                end += 1;
                true
            }
            Some(b'+') => {
                end += 1;
                false
            }
            _ => false,
        };
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        // "2e" or "2e+" keeps the mantissa and ignores the dangling marker
        if end > digits_start {
            exponent = s[digits_start..end].parse::<i64>().ok()?;
            if exp_negative {
                exponent = -exponent;
            }
        }
    }

    let mantissa = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
    );
    let mut value = Decimal::from_str(&mantissa).ok()?;

    if exponent > MAX_EXPONENT {
        return None;
    }
    if exponent < -MAX_EXPONENT {
        return Some(Decimal::ZERO);
    }
    for _ in 0..exponent.unsigned_abs() {
        value = if exponent > 0 {
            value.checked_mul(Decimal::TEN)?
        } else {
            value.checked_div(Decimal::TEN)?
        };
    }

    Some(value)
}

/// Parse a form field, treating empty or unparsable input as zero
#[inline]
pub fn parse_or_zero(raw: &str) -> Decimal {
    parse_number(raw).unwrap_or(Decimal::ZERO)
}

/// Round to 2 decimal places, half away from zero.
///
/// A result that rounds to zero is returned as positive zero.
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    let rounded = value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Format a money value with exactly two fraction digits (`20` -> `"20.00"`)
///
/// Values near the `Decimal` limit cannot carry a scale of 2 in a
/// `Decimal`; their missing fraction digits are padded in the string.
pub fn format_money(value: Decimal) -> String {
    let mut rounded = round_money(value);
    rounded.rescale(DECIMAL_PLACES);
    let mut text = rounded.to_string();

    let frac_len = match text.find('.') {
        Some(dot) => text.len() - dot - 1,
        None => {
            text.push('.');
            0
        }
    };
    for _ in frac_len..DECIMAL_PLACES as usize {
        text.push('0');
    }
    text
}

/// Multiply, treating an overflowing product like any other unusable input
#[inline]
pub(crate) fn mul_or_zero(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or(Decimal::ZERO)
}

/// Add, treating an overflowing sum like any other unusable input
#[inline]
pub(crate) fn add_or_zero(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(Decimal::ZERO)
}

/// Subtract, treating an overflowing difference like any other unusable input
#[inline]
pub(crate) fn sub_or_zero(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b).unwrap_or(Decimal::ZERO)
}
