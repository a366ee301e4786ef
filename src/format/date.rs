use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::value::RawValue;
use super::{or_fallback, ParseFailure};

pub const NOT_AVAILABLE: &str = "N/A";
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

// Epoch values at or above this magnitude are taken to be milliseconds.
const MILLIS_THRESHOLD: f64 = 1e12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TimestampStyle {
    /// `YYYY-MM-DD HH:mm:ss`
    #[default]
    Full,
    /// `YYYY-MM-DD`
    Date,
    /// Whole seconds since the epoch
    Unix,
}

/// Source of "now" for everything that computes relative timestamps.
pub trait Clock {
    /// Seconds since the Unix epoch.
    fn now(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock frozen at a given second, for tests and reproducible reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

/// Renders a Unix timestamp (seconds) or ISO-8601 string in UTC.
///
/// Absent input, including JSON `null`, and anything that does not name a
/// valid instant give `"N/A"`.
pub fn format_timestamp(value: impl Into<RawValue>, style: TimestampStyle) -> String {
    let result = parse_instant(&value.into()).map(|instant| render(instant, style));
    or_fallback(result, NOT_AVAILABLE)
}

fn render(instant: DateTime<Utc>, style: TimestampStyle) -> String {
    match style {
        TimestampStyle::Full => instant.format("%Y-%m-%d %H:%M:%S").to_string(),
        TimestampStyle::Date => instant.format("%Y-%m-%d").to_string(),
        TimestampStyle::Unix => instant.timestamp().to_string(),
    }
}

pub(crate) fn parse_instant(value: &RawValue) -> Result<DateTime<Utc>, ParseFailure> {
    match value {
        RawValue::Absent => Err(ParseFailure::Absent),
        RawValue::Integer(secs) => from_epoch(*secs as f64),
        RawValue::Float(secs) => from_epoch(*secs),
        RawValue::Text(text) => parse_text(text.trim()),
    }
}

fn from_epoch(number: f64) -> Result<DateTime<Utc>, ParseFailure> {
    if !number.is_finite() {
        return Err(ParseFailure::InvalidDate(number.to_string()));
    }
    let millis = if number.abs() >= MILLIS_THRESHOLD {
        number
    } else {
        number * 1000.0
    };
    DateTime::from_timestamp_millis(millis.floor() as i64)
        .ok_or_else(|| ParseFailure::InvalidDate(number.to_string()))
}

fn parse_text(text: &str) -> Result<DateTime<Utc>, ParseFailure> {
    if text.is_empty() {
        return Err(ParseFailure::Empty);
    }
    if let Ok(number) = text.parse::<f64>() {
        return from_epoch(number);
    }

    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc()))
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.and_utc()))
        .or_else(|_| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN).and_utc())
        })
        .map_err(|_| ParseFailure::InvalidDate(text.to_string()))
}

pub fn current_timestamp(clock: &impl Clock) -> i64 {
    clock.now()
}

pub fn twenty_four_hours_ago(clock: &impl Clock) -> i64 {
    clock.now() - SECONDS_PER_DAY
}

/// `days` may be fractional (0.5 is twelve hours) or negative, which yields a
/// timestamp in the future. The sign is not checked; offsets beyond the
/// `i64` range saturate.
pub fn time_ago(clock: &impl Clock, days: f64) -> i64 {
    clock.now().saturating_sub((days * SECONDS_PER_DAY as f64).floor() as i64)
}

pub fn hours_ago(clock: &impl Clock, hours: f64) -> i64 {
    clock.now().saturating_sub((hours * SECONDS_PER_HOUR as f64).floor() as i64)
}
