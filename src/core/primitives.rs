use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::schema(None, format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> i64 {
    time.timestamp()
}

/// Truncates a float timestamp toward zero.
pub fn float_to_unix_seconds(value: f64) -> ChartResult<i64> {
    if !value.is_finite() {
        return Err(ChartError::schema(None, "time must be finite"));
    }
    let truncated = value.trunc();
    // `i64::MAX as f64` rounds up to 2^63, which does not fit.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(ChartError::schema(
            None,
            format!("time {value} is outside the unix seconds range"),
        ));
    }
    Ok(truncated as i64)
}

/// Parses a textual timestamp into UTC unix seconds.
///
/// Accepted forms, tried in order:
/// - integer seconds (`"1609459200"`)
/// - RFC 3339 with offset or `Z`
/// - naive date-time with `T` or space separator, read as UTC
/// - bare `YYYY-MM-DD`, read as midnight UTC
pub fn parse_time_text(text: &str) -> ChartResult<i64> {
    let trimmed = text.trim();
    if let Ok(seconds) = trimmed.parse::<i64>() {
        return Ok(seconds);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.timestamp());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc().timestamp());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().timestamp());
        }
    }
    Err(ChartError::schema(
        None,
        format!("cannot parse `{trimmed}` as a timestamp"),
    ))
}
