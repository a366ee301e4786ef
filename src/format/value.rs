use num_bigint::BigInt;
use num_traits::{FromPrimitive, Num};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use super::ParseFailure;

/// A numeric-like value as it arrives on the wire.
///
/// The explorer mixes JSON numbers, decimal strings, scientific notation and
/// integer strings wider than 64 bits for the same fields, so every formatter
/// takes a `RawValue` and resolves it through [`to_number`](Self::to_number)
/// or [`to_integer`](Self::to_integer). JSON `null` and a missing field both
/// become [`RawValue::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum RawValue {
    #[default]
    Absent,
    Integer(i128),
    Float(f64),
    Text(String),
}

impl RawValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, RawValue::Absent)
    }

    /// Double-precision reading, for contexts that are not token amounts.
    pub fn to_number(&self) -> Result<f64, ParseFailure> {
        match self {
            RawValue::Absent => Err(ParseFailure::Absent),
            RawValue::Integer(i) => Ok(*i as f64),
            RawValue::Float(f) if f.is_finite() => Ok(*f),
            RawValue::Float(f) => Err(ParseFailure::NotNumeric(f.to_string())),
            RawValue::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(ParseFailure::Empty);
                }
                text.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .ok_or_else(|| ParseFailure::NotNumeric(text.to_string()))
            }
        }
    }

    /// Exact integer reading of an amount in smallest units.
    ///
    /// Accepts decimal or `0x`-prefixed hex strings. Fractional values and
    /// scientific notation inside strings are rejected rather than rounded.
    pub fn to_integer(&self) -> Result<BigInt, ParseFailure> {
        match self {
            RawValue::Absent => Err(ParseFailure::Absent),
            RawValue::Integer(i) => Ok(BigInt::from(*i)),
            RawValue::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 {
                    BigInt::from_f64(*f).ok_or_else(|| ParseFailure::NotInteger(f.to_string()))
                } else {
                    Err(ParseFailure::NotInteger(f.to_string()))
                }
            }
            RawValue::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(ParseFailure::Empty);
                }
                let parsed = match text
                    .strip_prefix("0x")
                    .or_else(|| text.strip_prefix("0X"))
                {
                    Some(hex) => BigInt::from_str_radix(hex, 16).ok(),
                    None => BigInt::from_str(text).ok(),
                };
                parsed.ok_or_else(|| ParseFailure::NotInteger(text.to_string()))
            }
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawValue::Absent,
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    RawValue::Integer(i as i128)
                } else if let Some(u) = n.as_u64() {
                    RawValue::Integer(u as i128)
                } else {
                    RawValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => RawValue::Text(s),
            other => RawValue::Text(other.to_string()),
        }
    }
}

impl From<&Value> for RawValue {
    fn from(value: &Value) -> Self {
        RawValue::from(value.clone())
    }
}

impl From<RawValue> for Value {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Absent => Value::Null,
            RawValue::Integer(i) => match i64::try_from(i) {
                Ok(small) => Value::from(small),
                Err(_) => Value::String(i.to_string()),
            },
            RawValue::Float(f) => serde_json::Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            RawValue::Text(s) => Value::String(s),
        }
    }
}

impl From<&RawValue> for RawValue {
    fn from(raw: &RawValue) -> Self {
        raw.clone()
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<&String> for RawValue {
    fn from(s: &String) -> Self {
        RawValue::Text(s.clone())
    }
}

impl From<i32> for RawValue {
    fn from(i: i32) -> Self {
        RawValue::Integer(i as i128)
    }
}

impl From<i64> for RawValue {
    fn from(i: i64) -> Self {
        RawValue::Integer(i as i128)
    }
}

impl From<u64> for RawValue {
    fn from(u: u64) -> Self {
        RawValue::Integer(u as i128)
    }
}

impl From<i128> for RawValue {
    fn from(i: i128) -> Self {
        RawValue::Integer(i)
    }
}

impl From<f64> for RawValue {
    fn from(f: f64) -> Self {
        RawValue::Float(f)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_null_is_absent() {
        let raw: RawValue = serde_json::from_str("null").unwrap();
        assert!(raw.is_absent());
    }

    #[test]
    fn json_numbers_keep_integer_precision() {
        let raw: RawValue = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(raw, RawValue::Integer(u64::MAX as i128));
    }

    #[test]
    fn scientific_text_reads_as_number_but_not_integer() {
        let raw = RawValue::from("1.234e3");
        assert_eq!(raw.to_number(), Ok(1234.0));
        assert!(matches!(raw.to_integer(), Err(ParseFailure::NotInteger(_))));
    }

    #[test]
    fn hex_text_reads_as_integer() {
        assert_eq!(RawValue::from("0x3b9aca00").to_integer(), Ok(BigInt::from(1_000_000_000u64)));
    }

    #[test]
    fn non_finite_text_is_not_numeric() {
        assert!(RawValue::from("NaN").to_number().is_err());
        assert!(RawValue::from("inf").to_number().is_err());
        assert_eq!(RawValue::from("  ").to_number(), Err(ParseFailure::Empty));
    }

    #[test]
    fn whole_floats_convert_exactly() {
        assert_eq!(
            RawValue::Float(1e21).to_integer().unwrap().to_string(),
            "1000000000000000000000"
        );
        assert!(RawValue::Float(1.5).to_integer().is_err());
    }
}
