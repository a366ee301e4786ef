use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;

use super::value::RawValue;
use super::ParseFailure;

/// Fractional digits kept in display output. Extra digits are truncated.
pub const MAX_FRACTION_DIGITS: usize = 4;

/// Largest `decimals` accepted for a fixed-point conversion. A `uint8`
/// on-chain, so anything above it is corrupt data.
pub const MAX_DECIMALS: u32 = u8::MAX as u32;

/// Converts an integer amount in smallest units to a plain decimal string,
/// `value / 10^decimals`, without passing through floating point.
///
/// Trailing fractional zeros are dropped: `1500000000000000000` at 18
/// decimals is `"1.5"`, and `1000000000000000000000` is `"1000"`.
pub fn to_fixed_point(value: &RawValue, decimals: u32) -> Result<String, ParseFailure> {
    if decimals > MAX_DECIMALS {
        return Err(ParseFailure::DecimalsOutOfRange(decimals));
    }
    let amount = value.to_integer()?;
    Ok(shift_decimal(&amount, decimals))
}

pub(crate) fn shift_decimal(amount: &BigInt, decimals: u32) -> String {
    let scale = BigUint::from(10u32).pow(decimals);
    let (whole, frac) = amount.magnitude().div_rem(&scale);

    let mut out = String::new();
    if amount.sign() == Sign::Minus {
        out.push('-');
    }
    out.push_str(&whole.to_string());

    if decimals > 0 {
        let frac = format!("{:0>width$}", frac.to_string(), width = decimals as usize);
        let frac = frac.trim_end_matches('0');
        if !frac.is_empty() {
            out.push('.');
            out.push_str(frac);
        }
    }
    out
}

/// `-?digits(.digits)?` with nothing else around it.
pub(crate) fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac_part.is_none_or(all_digits)
}

/// Renders a float in positional notation, never scientific.
pub(crate) fn float_to_plain(number: f64) -> String {
    format!("{}", number)
}

/// Groups the integer part of a plain decimal string with commas and
/// truncates the fraction to [`MAX_FRACTION_DIGITS`].
///
/// `"1234.56789"` becomes `"1,234.5678"`. Trailing zeros left after
/// truncation are removed, and a value that truncates to zero loses its sign.
pub fn group_decimal(plain: &str) -> String {
    let (negative, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, plain.strip_prefix('+').unwrap_or(plain)),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let int_part = int_part.trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac = frac_part.get(..MAX_FRACTION_DIGITS).unwrap_or(frac_part);
    let frac = frac.trim_end_matches('0');

    let is_zero = int_part == "0" && frac.is_empty();
    let mut out = String::new();
    if negative && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
