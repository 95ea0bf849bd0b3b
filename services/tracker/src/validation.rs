//! Input validation utilities
//!
//! Every raw string coming from a request body or query is parsed here into
//! a typed value, or rejected with a message suitable for the caller.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use uuid::Uuid;

/// Date-only layouts accepted in requests, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%a %b %d %Y", "%B %d, %Y", "%b %d, %Y"];

/// Date-time layouts accepted in requests; only the date part is kept
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Validate username, returning it trimmed
pub fn parse_username(raw: Option<&str>) -> Result<String, String> {
    non_blank(raw)
        .map(str::to_string)
        .ok_or_else(|| "Username is required".to_string())
}

/// Validate exercise description, returning it trimmed
pub fn parse_description(raw: Option<&str>) -> Result<String, String> {
    non_blank(raw)
        .map(str::to_string)
        .ok_or_else(|| "Description is required".to_string())
}

/// Whether `value` is `[+-]digits[.digits]`, with no exponent or words
fn is_plain_decimal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    all_digits(whole) && fraction.is_none_or(all_digits)
}

/// Validate duration in minutes
///
/// Decimal values are truncated toward zero; exponents are rejected.
pub fn parse_duration(raw: Option<&str>) -> Result<i32, String> {
    let value = non_blank(raw).ok_or_else(|| "Duration is required".to_string())?;

    if !is_plain_decimal(value) {
        return Err("Duration must be a number".to_string());
    }

    if let Ok(minutes) = value.parse::<i32>() {
        return Ok(minutes);
    }

    match value.parse::<f64>() {
        Ok(minutes)
            if minutes.trunc() >= f64::from(i32::MIN) && minutes.trunc() <= f64::from(i32::MAX) =>
        {
            Ok(minutes.trunc() as i32)
        }
        _ => Err("Duration is out of range".to_string()),
    }
}

/// Parse a calendar date from any of the accepted layouts
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let value = raw.trim();

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
    {
        return Ok(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc).date_naive());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|timestamp| timestamp.date())
        .ok_or_else(|| format!("Invalid date format: {}", value))
}

/// Parse an optional date; blank values count as absent
pub fn parse_optional_date(raw: Option<&str>) -> Result<Option<NaiveDate>, String> {
    non_blank(raw).map(parse_date).transpose()
}

/// Parse an optional result limit; blank values count as absent
pub fn parse_limit(raw: Option<&str>) -> Result<Option<i64>, String> {
    non_blank(raw)
        .map(|value| {
            value
                .parse::<u32>()
                .map(i64::from)
                .map_err(|_| "Limit must be a non-negative integer".to_string())
        })
        .transpose()
}

/// Parse a user identifier; anything not UUID-shaped is unknown
pub fn parse_user_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Timestamp at midnight UTC of the given date
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}
