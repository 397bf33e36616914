use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

pub const SECONDS_PER_DAY: f64 = 86_400.0;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Converts fractional unix seconds back to a UTC instant (millisecond precision).
pub fn unix_seconds_to_datetime(seconds: f64) -> ChartResult<DateTime<Utc>> {
    if !seconds.is_finite() {
        return Err(ChartError::InvalidData(
            "unix seconds must be finite".to_owned(),
        ));
    }
    let millis = (seconds * 1000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(ChartError::InvalidData(
            "unix seconds out of range".to_owned(),
        ));
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64).ok_or_else(|| {
        ChartError::InvalidData(format!("unix seconds {seconds} out of range"))
    })
}

/// Parses the date notations hosts commonly send.
///
/// Calendar dates without a time component resolve to midnight UTC.
pub fn parse_calendar_date(input: &str) -> ChartResult<DateTime<Utc>> {
    let trimmed = input.trim();
    let invalid = || ChartError::InvalidDate {
        input: input.to_owned(),
    };
    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?;
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    Err(invalid())
}

/// Validates a chrono `strftime` pattern without formatting anything.
pub fn validate_time_format(format: &str) -> ChartResult<()> {
    if format.is_empty() {
        return Err(ChartError::InvalidData(
            "time format must not be empty".to_owned(),
        ));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ChartError::InvalidData(format!(
            "invalid time format `{format}`"
        )));
    }
    Ok(())
}

/// Formats `time` with a `strftime` pattern, reporting bad patterns as errors.
pub fn format_datetime(time: DateTime<Utc>, format: &str) -> ChartResult<String> {
    let mut out = String::new();
    write!(out, "{}", time.format(format))
        .map_err(|_| ChartError::InvalidData(format!("invalid time format `{format}`")))?;
    Ok(out)
}
