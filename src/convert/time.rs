//! Date and Unix timestamp conversions (always UTC).

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::debug;

use super::{ConvertError, NOT_AVAILABLE};

/// Date format used across the bot's prompts and messages.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp display format for message templates.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Converts a `YYYY-MM-DD` date string into the Unix timestamp of that
/// date's midnight, UTC.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidDate`] when the string does not match
/// the format or names an impossible calendar date.
pub fn date_to_timestamp(date: &str) -> Result<i64, ConvertError> {
    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| {
        ConvertError::InvalidDate {
            input: date.to_owned(),
        }
    })?;

    Ok(parsed.and_time(NaiveTime::MIN).and_utc().timestamp())
}

/// Converts a Unix timestamp (seconds since epoch) into a
/// `YYYY-MM-DD HH:MM` string in UTC.
///
/// # Errors
///
/// Returns [`ConvertError::TimestampOutOfRange`] for timestamps chrono
/// cannot represent. Negative timestamps within range (dates before
/// 1970) convert normally.
pub fn timestamp_to_date(timestamp: i64) -> Result<String, ConvertError> {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format(DATETIME_FORMAT).to_string())
        .ok_or(ConvertError::TimestampOutOfRange { timestamp })
}

/// Fail-soft variant of [`timestamp_to_date`] for message templates:
/// unrepresentable timestamps render as [`NOT_AVAILABLE`].
#[must_use]
pub fn timestamp_label(timestamp: i64) -> String {
    match timestamp_to_date(timestamp) {
        Ok(label) => label,
        Err(e) => {
            debug!("formatting timestamp failed: {e}");
            NOT_AVAILABLE.to_owned()
        }
    }
}
