//! Display conversions for analytics values.
//!
//! Handles the three conversions every message template needs: compact
//! human-readable numbers (`1.50K`, `2.50M`), calendar dates to Unix
//! timestamps, and Unix timestamps back to date/time labels.
//!
//! Every conversion has a typed entry point returning
//! [`Result<_, ConvertError>`] and, where message code wants a
//! displayable string no matter what, a fail-soft wrapper that renders
//! failures as [`NOT_AVAILABLE`].

mod numeric;
mod time;

use thiserror::Error;

pub use numeric::{Numeric, format_number, lenient_f64, lenient_u64, try_format_number};
pub use time::{date_to_timestamp, timestamp_label, timestamp_to_date};

/// Placeholder shown in messages when a value cannot be converted.
pub const NOT_AVAILABLE: &str = "N/A";

/// Errors that can occur while converting values for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("value is not numeric: {input:?}")]
    NotNumeric { input: String },

    #[error("value is missing")]
    MissingValue,

    #[error("invalid date string: {input:?} (expected YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("timestamp out of representable range: {timestamp}")]
    TimestampOutOfRange { timestamp: i64 },
}
