//! Display formatting for raw explorer values.
//!
//! Every public formatter is total: malformed or missing input never errors,
//! it resolves to the fallback literal of the call site. Internally each
//! formatter produces a `Result<String, ParseFailure>` and [`or_fallback`]
//! is the one place where a failure becomes that literal.

pub mod date;
pub mod numeric;
pub mod response;
pub mod units;
pub mod value;

pub use date::{Clock, FixedClock, SystemClock, TimestampStyle};
pub use response::{ResponseFormatter, StatField};
pub use value::RawValue;

/// Why a raw value could not be turned into display text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    #[error("value is absent")]
    Absent,
    #[error("value is empty")]
    Empty,
    #[error("`{0}` is not a number")]
    NotNumeric(String),
    #[error("`{0}` is not an integer amount")]
    NotInteger(String),
    #[error("`{0}` is not a valid date")]
    InvalidDate(String),
    #[error("{0} decimals is more than a token can have")]
    DecimalsOutOfRange(u32),
}

pub(crate) fn or_fallback(result: Result<String, ParseFailure>, fallback: &str) -> String {
    match result {
        Ok(text) => text,
        Err(ParseFailure::Absent) => fallback.to_string(),
        Err(err) => {
            tracing::debug!(error = %err, fallback, "value could not be formatted");
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_replaces_every_failure() {
        assert_eq!(or_fallback(Ok("1".into()), "0"), "1");
        assert_eq!(or_fallback(Err(ParseFailure::Absent), "0"), "0");
        assert_eq!(
            or_fallback(Err(ParseFailure::NotInteger("abc".into())), "0 CFX"),
            "0 CFX"
        );
    }
}
