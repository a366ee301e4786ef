use cfxscan_cli::format::numeric::*;
use cfxscan_cli::format::{RawValue, ResponseFormatter, StatField};

mod common;

// --- format_integer ---

#[test]
fn test_format_integer_groups_thousands() {
    assert_eq!(format_integer("1234567"), "1,234,567");
    assert_eq!(format_integer(1_000_000), "1,000,000");
    assert_eq!(format_integer("999"), "999");
}

#[test]
fn test_format_integer_truncates_not_rounds() {
    assert_eq!(format_integer(1234.56789), "1,234.5678");
    assert_eq!(format_integer("1234.56789"), "1,234.5678");
    assert_eq!(format_integer("0.99999"), "0.9999");
}

#[test]
fn test_format_integer_drops_zero_fraction() {
    assert_eq!(format_integer(1.00009), "1");
    assert_eq!(format_integer("12.50"), "12.5");
}

#[test]
fn test_format_integer_scientific_notation() {
    assert_eq!(format_integer("1.234e3"), "1,234");
    assert_eq!(format_integer("2.5E6"), "2,500,000");
}

#[test]
fn test_format_integer_negative() {
    assert_eq!(format_integer(-1234567.5), "-1,234,567.5");
}

#[test]
fn test_format_integer_fallback() {
    assert_eq!(format_integer(None::<&str>), "0");
    assert_eq!(format_integer(""), "0");
    assert_eq!(format_integer("abc"), "0");
    assert_eq!(format_integer("NaN"), "0");
    assert_eq!(format_integer(RawValue::Absent), "0");
}

#[test]
fn test_format_integer_zero_is_indistinguishable_from_missing() {
    assert_eq!(format_integer(0), format_integer(None::<i64>));
}

#[test]
fn test_format_integer_json_values() {
    assert_eq!(format_integer(serde_json::json!(98765)), "98,765");
    assert_eq!(format_integer(serde_json::json!("98765")), "98,765");
    assert_eq!(format_integer(serde_json::Value::Null), "0");
}

// --- format_percentage ---

#[test]
fn test_format_percentage_two_decimals() {
    assert_eq!(format_percentage(12.5), "12.50%");
    assert_eq!(format_percentage("3.14159"), "3.14%");
}

#[test]
fn test_format_percentage_zero_spellings_differ() {
    assert_eq!(format_percentage(0), "0.00%");
    assert_eq!(format_percentage(""), "0%");
    assert_eq!(format_percentage(None::<f64>), "0%");
    assert_eq!(format_percentage("n/a"), "0%");
}

// --- format_gas_value ---

#[test]
fn test_format_gas_value_whole_gwei() {
    assert_eq!(format_gas_value("1000000000"), "1 Gwei");
    assert_eq!(format_gas_value(20_000_000_000u64), "20 Gwei");
}

#[test]
fn test_format_gas_value_fractional_gwei() {
    assert_eq!(format_gas_value("1500000000"), "1.5 Gwei");
    assert_eq!(format_gas_value("123456789"), "0.1234 Gwei");
}

#[test]
fn test_format_gas_value_fallback() {
    assert_eq!(format_gas_value(None::<&str>), "0 Gwei");
    assert_eq!(format_gas_value("xyz"), "0 Gwei");
    assert_eq!(format_gas_value(""), "0 Gwei");
}

// --- format_currency_value ---

#[test]
fn test_format_currency_value_one_and_a_half() {
    let formatted = format_currency_value("1500000000000000000");
    assert!(formatted.starts_with("1.5"));
    assert_eq!(formatted, "1.5 CFX");
}

#[test]
fn test_format_currency_value_beyond_2_pow_53() {
    assert_eq!(format_currency_value("1000000000000000000000"), "1,000 CFX");
    assert_eq!(
        format_currency_value("123456789012345678901234567"),
        "123,456,789.0123 CFX"
    );
}

#[test]
fn test_format_currency_value_large_float_input() {
    // 1e21 would print in exponent form in many languages
    assert_eq!(format_currency_value(1e21), "1,000 CFX");
}

#[test]
fn test_format_currency_value_fallback() {
    assert_eq!(format_currency_value(None::<&str>), "0 CFX");
    assert_eq!(format_currency_value("12abc"), "0 CFX");
    assert_eq!(format_currency_value("1.5e18"), "0 CFX");
}

#[test]
fn test_format_currency_value_dust() {
    assert_eq!(format_currency_value("1"), "0 CFX");
    assert_eq!(format_currency_value("100000000000000"), "0.0001 CFX");
}

// --- format_token_amount ---

#[test]
fn test_format_token_amount_six_decimals() {
    assert_eq!(format_token_amount("1234567", 6, false), "1.2345");
    assert_eq!(format_token_amount("2500000000", 6, false), "2,500");
}

#[test]
fn test_format_token_amount_native_ignores_decimals() {
    assert_eq!(format_token_amount("2000000000000000000", 6, true), "2 CFX");
}

#[test]
fn test_format_token_amount_fallback() {
    assert_eq!(format_token_amount(None::<&str>, 6, false), "0");
    assert_eq!(format_token_amount(None::<&str>, 18, true), "0 CFX");
    assert_eq!(format_token_amount("oops", 6, false), "0");
}

// --- ResponseFormatter ---

#[test]
fn test_response_unit_is_bare_and_exact() {
    let fmt = common::fmt();
    assert_eq!(fmt.unit("1500000000000000000", 18), "1.5");
    assert_eq!(
        fmt.unit("123456789012345678901234567", 18),
        "123456789.012345678901234567"
    );
}

#[test]
fn test_response_unit_fallback() {
    let fmt = common::fmt();
    assert_eq!(fmt.unit(None::<&str>, 18), "0");
    assert_eq!(fmt.unit("bad", 18), "0");
}

#[test]
fn test_response_missing_values_split_by_kind() {
    let fmt = ResponseFormatter;
    assert_eq!(fmt.timestamp(RawValue::Absent), "N/A");
    assert_eq!(fmt.date(RawValue::Absent), "N/A");
    assert_eq!(fmt.number(RawValue::Absent), "0");
    assert_eq!(fmt.gas(RawValue::Absent), "0 Gwei");
    assert_eq!(fmt.currency(RawValue::Absent), "0 CFX");
    assert_eq!(fmt.percentage(RawValue::Absent), "0%");
}

#[test]
fn test_response_token_amount_with_symbol() {
    let fmt = common::fmt();
    assert_eq!(fmt.token_amount("2500000", 6, Some("USDT")), "2.5 USDT");
    assert_eq!(fmt.token_amount(None::<&str>, 6, Some("USDT")), "0 USDT");
    assert_eq!(fmt.token_amount("2500000", 6, None), "2.5");
    assert_eq!(fmt.token_amount("2500000", 6, Some("")), "2.5");
}

#[test]
fn test_response_stat_field_dispatch() {
    let fmt = common::fmt();
    assert_eq!(fmt.stat_field(StatField::Count, "1234"), "1,234");
    assert_eq!(fmt.stat_field(StatField::Value, "1500000000000000000"), "1.5 CFX");
    assert_eq!(fmt.stat_field(StatField::Fee, "21000000000000"), "0 CFX");
    assert_eq!(fmt.stat_field(StatField::Gas, "2000000000"), "2 Gwei");
}
