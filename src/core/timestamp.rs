//! Timestamp formatting utilities
//!
//! Time formats are plain strftime strings as understood by chrono. An empty
//! format disables the timestamp segment of a line entirely.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write};

/// Default line timestamp: `2025-01-08 10:30:45`
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
pub const ISO8601: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// RFC 3339 with offset: `2025-01-08T10:30:45+01:00`
pub const RFC3339: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Wall clock only: `10:30:45`
pub const TIME_ONLY: &str = "%H:%M:%S";

/// Check that every specifier in `format` is one chrono knows how to render.
///
/// # Examples
///
/// ```
/// use flg::core::timestamp::validate_time_format;
///
/// assert!(validate_time_format("%Y-%m-%d").is_ok());
/// assert!(validate_time_format("%Y-%Q").is_err());
/// ```
pub fn validate_time_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(LoggerError::formatter(
            "time",
            format!("invalid specifier in {:?}", format),
        ));
    }
    Ok(())
}

/// Append the current local time rendered with `format` to `buf`.
pub fn render_now(format: &str, buf: &mut Vec<u8>) -> Result<()> {
    render(&Local::now(), format, buf)
}

/// Append `datetime` rendered with `format` to `buf`.
///
/// An unknown specifier is a formatter error and leaves `buf` untouched.
pub fn render<Tz>(datetime: &DateTime<Tz>, format: &str, buf: &mut Vec<u8>) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    validate_time_format(format)?;
    let mut rendered = String::new();
    write!(rendered, "{}", datetime.format(format)).map_err(|_| {
        LoggerError::formatter("time", format!("cannot render {:?}", format))
    })?;
    buf.extend_from_slice(rendered.as_bytes());
    Ok(())
}
