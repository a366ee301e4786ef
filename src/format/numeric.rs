use super::units::{self, to_fixed_point};
use super::value::RawValue;
use super::{or_fallback, ParseFailure};

/// Symbol of the chain's native currency.
pub const NATIVE_SYMBOL: &str = "CFX";
/// Decimals of the native currency (1 CFX = 10^18 drip).
pub const NATIVE_DECIMALS: u32 = 18;
/// Display unit for gas prices.
pub const GAS_UNIT: &str = "Gwei";
pub const GAS_DECIMALS: u32 = 9;

/// Thousands-separated number with at most four truncated fractional digits.
///
/// Plain decimal strings are grouped digit-for-digit, so integer strings of
/// any length keep every digit. Everything else (JSON numbers, scientific
/// notation such as `"1.234e3"`) goes through `f64` first. Absent or
/// unparseable input gives `"0"`.
pub fn format_integer(value: impl Into<RawValue>) -> String {
    or_fallback(grouped(&value.into()), "0")
}

fn grouped(value: &RawValue) -> Result<String, ParseFailure> {
    match value {
        RawValue::Text(text) if units::is_plain_decimal(text.trim()) => {
            Ok(units::group_decimal(text.trim()))
        }
        RawValue::Integer(i) => Ok(units::group_decimal(&i.to_string())),
        other => {
            let number = other.to_number()?;
            Ok(units::group_decimal(&units::float_to_plain(number)))
        }
    }
}

/// Input is already a percentage; rendered with two decimals.
/// `"0%"` on absent or invalid input, `"0.00%"` for an actual zero.
pub fn format_percentage(value: impl Into<RawValue>) -> String {
    let result = value.into().to_number().map(|pct| format!("{:.2}%", pct + 0.0));
    or_fallback(result, "0%")
}

/// Gas price in drip shown in Gwei.
pub fn format_gas_value(value: impl Into<RawValue>) -> String {
    let result = scaled(&value.into(), GAS_DECIMALS).map(|amount| format!("{} {}", amount, GAS_UNIT));
    or_fallback(result, &format!("0 {}", GAS_UNIT))
}

/// Native amount in drip shown in whole CFX.
pub fn format_currency_value(value: impl Into<RawValue>) -> String {
    let result =
        scaled(&value.into(), NATIVE_DECIMALS).map(|amount| format!("{} {}", amount, NATIVE_SYMBOL));
    or_fallback(result, &format!("0 {}", NATIVE_SYMBOL))
}

/// Token amount in smallest units scaled by `decimals`.
///
/// With `is_native` the value is treated as CFX regardless of `decimals`.
pub fn format_token_amount(amount: impl Into<RawValue>, decimals: u32, is_native: bool) -> String {
    if is_native {
        return format_currency_value(amount);
    }
    or_fallback(scaled(&amount.into(), decimals), "0")
}

fn scaled(value: &RawValue, decimals: u32) -> Result<String, ParseFailure> {
    to_fixed_point(value, decimals).map(|plain| units::group_decimal(&plain))
}
