//! Date parsing helpers for hand-maintained case data.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Configuration for date format handling
#[derive(Debug, Clone)]
pub struct DateFormatConfig {
    /// List of date format strings to try when parsing dates
    pub date_formats: Vec<String>,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(),  // ISO format: 2024-03-15
                "%m/%d/%Y".to_string(),  // US: 03/15/2024
                "%Y/%m/%d".to_string(),  // 2024/03/15
                "%B %d, %Y".to_string(), // March 15, 2024
                "%b %d, %Y".to_string(), // Mar 15, 2024
                "%d %B %Y".to_string(),  // 15 March 2024
                "%Y%m%d".to_string(),    // Compact: 20240315
            ],
            enable_format_detection: true,
        }
    }
}

/// Parse a date string with multiple format attempts
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, detected_format) {
                return Some(date);
            }
        }
    }

    None
}

/// Try to detect the date format based on string patterns
#[must_use]
pub fn detect_date_format(s: &str) -> Option<&'static str> {
    // Unpadded ISO-like format (2024-3-5)
    if s.split('-').count() == 3 && s.split('-').next().is_some_and(|y| y.len() == 4) {
        return Some("%Y-%m-%d");
    }

    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 {
            if parts[0].len() == 4 {
                return Some("%Y/%m/%d");
            } else if parts[2].len() == 4 {
                return Some("%m/%d/%Y");
            } else if parts[2].len() == 2 {
                return Some("%m/%d/%y");
            }
        }
    }

    None
}

/// Remove a trailing timezone token from a date or date-time string.
///
/// Handles forms such as `2025-03-15 EST`, `2025-03-15T00:00:00Z`,
/// `2025-03-15T10:00:00-05:00` and `March 15, 2025 (PST)`. The calendar
/// date part is returned untouched.
#[must_use]
pub fn strip_timezone_suffix(raw: &str) -> &str {
    let mut s = raw.trim();

    // Drop a trailing whitespace-separated zone token
    if let Some((head, last)) = s.rsplit_once(char::is_whitespace) {
        if is_timezone_token(last) {
            s = head.trim_end();
        }
    }

    // ISO date-time: keep the date before the 'T'
    if let Some((date, _time)) = s.split_once('T') {
        if date.len() == 10 && date.as_bytes()[4] == b'-' {
            return date;
        }
    }

    s
}

fn is_timezone_token(token: &str) -> bool {
    let token = token.trim_matches(|c| c == '(' || c == ')');
    if token.is_empty() {
        return false;
    }
    if token.starts_with("UTC") || token.starts_with("GMT") {
        return true;
    }
    if token.len() >= 2 && token.len() <= 5 && token.chars().all(|c| c.is_ascii_uppercase()) {
        return true;
    }
    // Numeric offsets like +0500 or -05:00
    let mut chars = token.chars();
    matches!(chars.next(), Some('+' | '-'))
        && token.len() > 1
        && chars.all(|c| c.is_ascii_digit() || c == ':')
}

/// Parse a statute-of-limitations date after discarding its timezone suffix
#[must_use]
pub fn parse_sol_date(raw: &str) -> Option<NaiveDate> {
    parse_date_string(strip_timezone_suffix(raw), &DateFormatConfig::default())
}

/// Parse a timestamp such as `2024-03-15T10:00:00.000Z` or
/// `2024-03-15T10:00:00`. Offsets are normalised to UTC; a bare date is
/// read as midnight.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| parse_sol_date(raw).and_then(|date| date.and_hms_opt(0, 0, 0)))
}

/// Serde helper for optional date fields.
///
/// Accepts anything [`parse_sol_date`] does. Empty strings, unreadable dates
/// and non-string values become `None` instead of failing the record.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_str).and_then(parse_sol_date))
}

/// Serde helper for required date fields written in any supported form
pub fn deserialize_flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_sol_date(&raw).ok_or_else(|| D::Error::custom(format!("unrecognised date {raw:?}")))
}

/// Serde helper for required timestamps written in any supported form
pub fn deserialize_flexible_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("unrecognised timestamp {raw:?}")))
}

/// Serde helper for optional timestamps; unreadable values become `None`
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_str).and_then(parse_timestamp))
}
