use super::date::{self, TimestampStyle};
use super::numeric;
use super::units::to_fixed_point;
use super::value::RawValue;
use super::or_fallback;

/// Numeric measures carried by statistics rows and top-N entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    Count,
    Value,
    Fee,
    Gas,
    Difficulty,
    HashRate,
}

impl StatField {
    pub fn label(&self) -> &'static str {
        match self {
            StatField::Count => "count",
            StatField::Value => "value",
            StatField::Fee => "fee",
            StatField::Gas => "gas",
            StatField::Difficulty => "difficulty",
            StatField::HashRate => "hash rate",
        }
    }
}

/// Formatting façade used by the report layer.
///
/// Timestamps and dates render `"N/A"` when missing; every numeric field
/// falls back to its `"0 ..."` literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseFormatter;

impl ResponseFormatter {
    pub fn number(&self, value: impl Into<RawValue>) -> String {
        numeric::format_integer(value)
    }

    pub fn percentage(&self, value: impl Into<RawValue>) -> String {
        numeric::format_percentage(value)
    }

    pub fn gas(&self, value: impl Into<RawValue>) -> String {
        numeric::format_gas_value(value)
    }

    pub fn currency(&self, value: impl Into<RawValue>) -> String {
        numeric::format_currency_value(value)
    }

    /// Token amount followed by its symbol when one is known.
    pub fn token_amount(
        &self,
        amount: impl Into<RawValue>,
        decimals: u32,
        symbol: Option<&str>,
    ) -> String {
        let amount = numeric::format_token_amount(amount, decimals, false);
        match symbol {
            Some(symbol) if !symbol.is_empty() => format!("{} {}", amount, symbol),
            _ => amount,
        }
    }

    pub fn timestamp(&self, value: impl Into<RawValue>) -> String {
        date::format_timestamp(value, TimestampStyle::Full)
    }

    pub fn date(&self, value: impl Into<RawValue>) -> String {
        date::format_timestamp(value, TimestampStyle::Date)
    }

    /// Bare `value / 10^decimals` without grouping or unit.
    pub fn unit(&self, value: impl Into<RawValue>, decimals: u32) -> String {
        or_fallback(to_fixed_point(&value.into(), decimals), "0")
    }

    pub fn stat_field(&self, field: StatField, value: impl Into<RawValue>) -> String {
        match field {
            StatField::Count | StatField::Difficulty | StatField::HashRate => self.number(value),
            StatField::Value | StatField::Fee => self.currency(value),
            StatField::Gas => self.gas(value),
        }
    }
}
